use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub img_src: String,
    pub href: String,
}

#[test]
fn test_wire_field_names() {
    let p = Project {
        title: "dummy".into(),
        description: "A dummy project.".into(),
        img_src: "/static/images/dummy.png".into(),
        href: "https://example.com/dummy".into(),
    };
    let json = serde_json::to_string(&p).unwrap();
    assert!(json.contains("\"imgSrc\""));
    assert!(!json.contains("img_src"));
}
