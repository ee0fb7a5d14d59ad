//! Output format tests over parsed trees

use textree::textree::formats::FormatRegistry;
use textree::textree::loader::DocumentLoader;

#[test]
fn test_treeviz_output() {
    let tree = DocumentLoader::from_string("asd.").parse();
    let output = FormatRegistry::with_defaults()
        .serialize(&tree, "treeviz")
        .unwrap();

    insta::assert_snapshot!(output, @r"
⧉ asd.
└─ ¶ asd.
  └─ ↵ asd.
    ├─ ◦ asd
    │ ├─ · 'a'
    │ ├─ · 's'
    │ └─ · 'd'
    └─ ◦ .
      └─ · '.'
");
}

#[test]
fn test_tag_output() {
    let tree = DocumentLoader::from_string("Hi!").parse();
    let output = FormatRegistry::with_defaults()
        .serialize(&tree, "tag")
        .unwrap();

    insta::assert_snapshot!(output, @r"
<text>
  <paragraph>
    <sentence>
      <word>
        <letter>H</letter>
        <letter>i</letter>
      </word>
      <word>
        <sign>!</sign>
      </word>
    </sentence>
  </paragraph>
</text>
");
}

#[test]
fn test_json_output_is_a_snapshot_tree() {
    let tree = DocumentLoader::from_string("A b.").parse();
    let output = FormatRegistry::with_defaults()
        .serialize(&tree, "json")
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["node_type"], "Text");
    assert_eq!(value["label"], "A b.");
    let sentence = &value["children"][0]["children"][0];
    assert_eq!(sentence["node_type"], "Sentence");
    assert_eq!(sentence["children"][1]["node_type"], "Symbol");
    assert_eq!(sentence["children"][1]["attributes"]["kind"], "space");
}

#[test]
fn test_every_default_format_serializes_an_empty_tree() {
    let tree = DocumentLoader::from_string("").parse();
    let registry = FormatRegistry::with_defaults();
    for name in registry.list_formats() {
        assert!(
            registry.serialize(&tree, &name).is_ok(),
            "format {name} failed on an empty tree"
        );
    }
}
