use crate::types::{Catalog, Project};
use std::sync::LazyLock;
use tracing::debug;

static CURRENT: LazyLock<Catalog> = LazyLock::new(|| build(CURRENT_RECORDS));
static ARCHIVED: LazyLock<Catalog> = LazyLock::new(|| build(ARCHIVED_RECORDS));

/// The catalog revision in effect. Built once, never mutated afterwards.
pub fn catalog() -> &'static Catalog {
    &CURRENT
}

/// The superseded catalog revision, kept for reference.
pub fn archived() -> &'static Catalog {
    &ARCHIVED
}

fn build(records: &[(&str, &str, &str, &str)]) -> Catalog {
    let projects = records
        .iter()
        .map(|&(title, description, img_src, href)| Project {
            title: title.to_owned(),
            description: description.to_owned(),
            img_src: img_src.to_owned(),
            href: href.to_owned(),
        })
        .collect();
    let catalog = Catalog::new(projects);
    debug!(records = catalog.len(), "catalog built from source literals");
    catalog
}

// Record columns: title, description, image path, repository link.
const CURRENT_RECORDS: &[(&str, &str, &str, &str)] = &[
    (
        "miniAGI",
        "miniAGI is a Streamlit application that leverages the zero-shot ReAct Agent from Langchain with vectorsearch and many various integrations.",
        "/static/images/miniagi.png",
        "https://github.com/tdolan21/miniAGI",
    ),
    (
        "Zephyr-7b-α-API",
        "This repo contains an api with postgreSQL database and a demo application for the zephyr-7b-alpha model from Huggingface.",
        "/static/images/zephyr.png",
        "https://github.com/tdolan21/zephyr-7b-alpha-api",
    ),
    (
        "SSD-1B + SDXL1.0 Image Gen Suite",
        "Image generation suite pairing the SSD-1B model from the Segmind AI team with SDXL 1.0 for side-by-side comparison.",
        "/static/images/SSD_1B.png",
        "https://github.com/tdolan21/ssd-1b-ui/tree/main",
    ),
    (
        "Detr-Resnet-50-API",
        "This repo contains an api with postgreSQL database and a demo application for the zephyr-7b-alpha model from Huggingface.",
        "/static/images/detr-50-thumbnail.png",
        "https://github.com/tdolan21/detr-resnet-50-api",
    ),
    (
        "Kosmos-2-Patch14-224 aPI",
        "This repo contains an api with postgreSQL database and a demo application for the zephyr-7b-alpha model from Huggingface.",
        "/static/images/kosmos-2-thumbnail.png",
        "https://github.com/tdolan21/kosmos-2-demo",
    ),
    (
        "Distil-Whisper-API",
        "This repo contains an api with postgreSQL database and a demo application for the distil-whisper model from Huggingface.",
        "/static/images/distil-whisper.png",
        "https://github.com/tdolan21/distil-whisper-api",
    ),
];

// The earlier revision of the table, superseded by the one above.
const ARCHIVED_RECORDS: &[(&str, &str, &str, &str)] = &[
    (
        "miniAGI",
        "miniAGI is a Streamlit application that leverages the zero-shot ReAct Agent from Langchain with vectorsearch and many various integrations.",
        "/static/images/miniagi.png",
        "https://github.com/tdolan21/miniAGI",
    ),
    (
        "Zephyr-7b-α-API",
        "This repo contains an api with postgreSQL database and a demo application for the zephyr-7b-alpha model from Huggingface.",
        "/static/images/zephyr.png",
        "https://github.com/tdolan21/zephyr-7b-alpha-api",
    ),
    (
        "SSD-1B-API",
        "FastAPI implementation of the SSD-1B model from the Segmind AI team.",
        "/static/images/SSD_1B.png",
        "https://github.com/tdolan21/ssd-1b-ui/tree/main",
    ),
    (
        "Detr-Resnet-50-API",
        "This repo contains an api with postgreSQL database and a demo application for the zephyr-7b-alpha model from Huggingface.",
        "/static/images/detr-50-thumbnail.png",
        "https://github.com/tdolan21/detr-resnet-50-api",
    ),
    (
        "Kosmos-2-Patch14-224 aPI",
        "This repo contains an api with postgreSQL database and a demo application for the zephyr-7b-alpha model from Huggingface.",
        "/static/images/kosmos-2-thumbnail.png",
        "https://github.com/tdolan21/kosmos-2-demo",
    ),
];

#[test]
fn test_catalog_contents() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.projects()[0].title, "miniAGI");
    assert_eq!(catalog.projects()[2].title, "SSD-1B + SDXL1.0 Image Gen Suite");
    assert_eq!(
        catalog.projects()[2].href,
        "https://github.com/tdolan21/ssd-1b-ui/tree/main"
    );
}

#[test]
fn test_archived_contents() {
    let archived = archived();
    assert_eq!(archived.len(), 5);
    assert_eq!(archived.projects()[0].title, "miniAGI");
    assert_eq!(archived.projects()[2].title, "SSD-1B-API");
}

#[test]
fn test_no_empty_fields() {
    for catalog in [catalog(), archived()] {
        for project in catalog.iter() {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.img_src.is_empty());
            assert!(!project.href.is_empty());
        }
    }
}

#[test]
fn test_accessor_is_deterministic() {
    assert!(std::ptr::eq(catalog(), catalog()));
    assert_eq!(catalog(), catalog());
    assert_eq!(archived(), archived());
}
