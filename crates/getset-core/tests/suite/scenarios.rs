use std::collections::HashSet;

use getset_core::{
    ClassSnapshot, DocLabels, Field, FieldAccessorGenerator, GenerateOptions, GeneratedMethod,
};
use pretty_assertions::assert_eq;

fn names(methods: &[GeneratedMethod]) -> Vec<&str> {
    methods.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn final_fields_are_skipped() {
    let fields = vec![
        Field::new("id", "int").with_final(true),
        Field::new("name", "String"),
    ];

    let out = FieldAccessorGenerator::default().generate(&fields, &HashSet::new());

    assert_eq!(
        out,
        vec![
            GeneratedMethod {
                name: "getName".into(),
                source_text: "public String getName(){\n return this.name;}\n".into(),
            },
            GeneratedMethod {
                name: "setName".into(),
                source_text: "public void setName(String name){\nthis.name = name;}".into(),
            },
        ]
    );
}

#[test]
fn every_non_final_field_gets_getter_then_setter_in_declaration_order() {
    let fields = vec![
        Field::new("b", "int"),
        Field::new("a", "boolean"),
        Field::new("LIMIT", "int").with_static(true).with_final(true),
        Field::new("c", "String").with_static(true),
    ];

    let out = FieldAccessorGenerator::default().generate(&fields, &HashSet::new());

    assert_eq!(names(&out), ["getB", "setB", "isA", "setA", "getC", "setC"]);
}

#[test]
fn static_modifier_follows_the_field() {
    let fields = vec![
        Field::new("shared", "int").with_static(true),
        Field::new("local", "int"),
    ];

    let out = FieldAccessorGenerator::default().generate(&fields, &HashSet::new());

    assert!(out[0].source_text.starts_with("public static int getShared()"));
    assert!(out[1].source_text.starts_with("public static void setShared(int shared)"));
    assert!(out[2].source_text.starts_with("public int getLocal()"));
    assert!(out[3].source_text.starts_with("public void setLocal(int local)"));
}

#[test]
fn documented_field_produces_documented_accessors() {
    let field = Field::new("age", "int").with_comment("/**\n * the user's age\n */");
    let generator = FieldAccessorGenerator::new(GenerateOptions {
        labels: DocLabels::new("Gets", "Sets"),
    });

    let out = generator.generate(&[field], &HashSet::new());

    assert_eq!(
        out[0].source_text,
        concat!(
            "/** \n* Gets theuser'sage \n* @return age theuser'sage \n*/",
            "public int getAge(){\n return this.age;}\n",
        )
    );
    assert_eq!(
        out[1].source_text,
        concat!(
            "/** \n* Sets theuser'sage \n* @param age theuser'sage \n*/",
            "public void setAge(int age){\nthis.age = age;}",
        )
    );
}

#[test]
fn line_commented_field_gets_empty_line_comment() {
    let field = Field::new("age", "int").with_comment("// the user's age\n");

    let out = FieldAccessorGenerator::default().generate(&[field], &HashSet::new());

    assert!(out[0].source_text.starts_with("// public int getAge()"));
    assert!(out[1].source_text.starts_with("// public void setAge(int age)"));
}

#[test]
fn snapshot_from_json_round_trips_through_generation() {
    let snapshot: ClassSnapshot = serde_json::from_str(
        r#"{
            "name": "Account",
            "fields": [
                { "name": "id", "type": "long", "is_final": true },
                { "name": "active", "type": "boolean", "leading_comment": "/** open */" }
            ],
            "methods": ["isActive"]
        }"#,
    )
    .unwrap();

    let out = FieldAccessorGenerator::default().generate_for(&snapshot);

    assert_eq!(
        out,
        vec![GeneratedMethod {
            name: "setActive".into(),
            source_text: concat!(
                "/** \n* 设置 open \n* @param active open \n*/",
                "public void setActive(boolean active){\nthis.active = active;}",
            )
            .into(),
        }]
    );
}
