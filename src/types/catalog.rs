use super::Project;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Catalog {
        Catalog { projects }
    }

    /// All records, in declared display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[test]
fn test_order_preserved() {
    let p = Project {
        title: "first".into(),
        description: "A dummy project.".into(),
        img_src: "/static/images/dummy.png".into(),
        href: "https://example.com/dummy".into(),
    };
    let catalog = Catalog::new(vec![
        p.clone(),
        Project { title: "second".into(), ..p.clone() },
        Project { title: "third".into(), ..p },
    ]);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.projects()[1].title, "second");
    assert_eq!(catalog.get(2).map(|p| p.title.as_str()), Some("third"));
    assert!(catalog.get(3).is_none());
}
