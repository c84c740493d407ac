//! Property tests for descriptor compilation.

use proptest::prelude::*;

use layertool::{compile_str, Layer, Layers};

fn layer_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap()
}

fn descriptor(order: Option<&[String]>, application_layers: &[String]) -> String {
    let mut xml = String::from("<layers xmlns=\"http://www.springframework.org/schema/boot/layers\">");
    if !application_layers.is_empty() {
        xml.push_str("<application>");
        for layer in application_layers {
            xml.push_str(&format!("<into layer=\"{layer}\"><include>{layer}/**</include></into>"));
        }
        xml.push_str("</application>");
    }
    if let Some(order) = order {
        xml.push_str("<layerOrder>");
        for layer in order {
            xml.push_str(&format!("<layer>{layer}</layer>"));
        }
        xml.push_str("</layerOrder>");
    }
    xml.push_str("</layers>");
    xml
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Without a layerOrder section the compiled order is empty.
    #[test]
    fn property_no_layer_order_is_empty(
        application in proptest::collection::vec(layer_name(), 0..=4),
    ) {
        let layers = compile_str(&descriptor(None, &application)).unwrap();
        prop_assert!(layers.layers().is_empty());
        prop_assert_eq!(layers.application_selectors().len(), application.len());
    }

    /// PROPERTY: The declared order comes back exactly, duplicates included.
    #[test]
    fn property_layer_order_preserved(
        order in proptest::collection::vec(layer_name(), 1..=8),
    ) {
        let layers = compile_str(&descriptor(Some(&order), &[])).unwrap();
        let expected: Vec<Layer> = order.iter().map(|name| Layer::new(name.as_str())).collect();
        prop_assert_eq!(layers.layers(), expected.as_slice());
    }

    /// PROPERTY: Compiling the same descriptor twice yields equal results.
    #[test]
    fn property_compile_is_deterministic(
        order in proptest::collection::vec(layer_name(), 1..=5),
        application in proptest::collection::vec(layer_name(), 0..=5),
    ) {
        let xml = descriptor(Some(&order), &application);
        prop_assert_eq!(compile_str(&xml).unwrap(), compile_str(&xml).unwrap());
    }

    /// PROPERTY: Arbitrary input never panics; it compiles or returns an error.
    #[test]
    fn property_compile_never_panics(text in "\\PC{0,200}") {
        let _ = compile_str(&text);
    }

    /// PROPERTY: A resource lands in the layer whose pattern claims it.
    #[test]
    fn property_first_matching_selector_wins(
        application in proptest::collection::vec(layer_name(), 1..=5),
        file in proptest::string::string_regex("[A-Za-z]{1,8}\\.class").unwrap(),
    ) {
        let layers = compile_str(&descriptor(None, &application)).unwrap();
        let target = &application[application.len() - 1];
        let resource = format!("{target}/{file}");

        prop_assert_eq!(layers.layer_for_resource(&resource).unwrap().name(), target.as_str());
    }
}
