//! Reusable descriptor content

pub const WORKED_EXAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<layers xmlns="http://www.springframework.org/schema/boot/layers"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xsi:schemaLocation="http://www.springframework.org/schema/boot/layers
                            https://www.springframework.org/schema/boot/layers/layers-3.5.xsd">
    <application>
        <into layer="app">
            <include>org/app/**</include>
        </into>
    </application>
    <dependencies>
        <into layer="deps">
            <excludeModuleDependencies/>
        </into>
    </dependencies>
    <layerOrder>
        <layer>deps</layer>
        <layer>app</layer>
    </layerOrder>
</layers>
"#;

pub const FULL_DESCRIPTOR: &str = r#"<layers xmlns="http://www.springframework.org/schema/boot/layers">
    <application>
        <into layer="spring-boot-loader">
            <include>org/springframework/boot/loader/**</include>
        </into>
        <into layer="application"/>
    </application>
    <dependencies>
        <into layer="application">
            <includeModuleDependencies/>
        </into>
        <into layer="snapshot-dependencies">
            <include>*:*:*SNAPSHOT</include>
        </into>
        <into layer="company-dependencies">
            <include>com.acme:*</include>
        </into>
        <into layer="dependencies"/>
    </dependencies>
    <layerOrder>
        <layer>dependencies</layer>
        <layer>spring-boot-loader</layer>
        <layer>snapshot-dependencies</layer>
        <layer>company-dependencies</layer>
        <layer>application</layer>
    </layerOrder>
</layers>
"#;

pub const TWO_LAYER_ORDERS: &str = r#"<layers xmlns="http://www.springframework.org/schema/boot/layers">
    <layerOrder><layer>a</layer></layerOrder>
    <layerOrder><layer>b</layer></layerOrder>
</layers>
"#;

pub const MISSING_LAYER_ATTRIBUTE: &str = r#"<layers xmlns="http://www.springframework.org/schema/boot/layers">
    <application>
        <into><include>**</include></into>
    </application>
</layers>
"#;
