#![no_main]

use libfuzzer_sys::fuzz_target;
use layertool::Layers;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Compilation either succeeds or errors, and a compiled result answers lookups
        if let Ok(layers) = layertool::compile_str(content) {
            let _ = layers.layer_for_resource(content);
        }
    }
});
