use crate::types::Catalog;

// Records are listed in catalog order: the declared order is the display order.
pub fn display_catalog(catalog: &Catalog) {
    for project in catalog.iter() {
        println!("{}:", project.title);
        println!("  - {}", project.description);
        println!("  - image: {}", project.img_src);
        println!("  - repository: {}", project.href);
        println!();
    }
}
