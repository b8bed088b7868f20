//! Integration tests for site builds.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use pagewright::site::{
    DirSource, PageOutcome, PageSpec, PageTemplate, SiteBuilder, SiteConfig, DEFAULT_BRAND,
};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn site_config(content: &Path, output: &Path) -> SiteConfig {
    let mut config = SiteConfig {
        content_base: content.display().to_string(),
        site_url: "https://www.example.com".to_string(),
        output_dir: output.to_path_buf(),
        brand: "Example Lawyers".to_string(),
        ..Default::default()
    };
    config
        .labels
        .insert("/personal-injury".to_string(), "Personal Injury".to_string());
    config.pages = vec![
        PageSpec::new("/personal-injury", "personal-injury.txt")
            .with_related(["/personal-injury/auto-accidents"]),
        PageSpec::new("/personal-injury/auto-accidents", "auto.txt")
            .with_related(["/personal-injury"]),
        PageSpec::new("/missing", "missing.txt"),
    ];
    config
}

fn seed_content(dir: &Path) {
    write(
        dir,
        "personal-injury.txt",
        "ENHANCED BODY CONTENT:\n\
         Improved Meta Description: Injury help.\n\
         H1: Personal Injury\n\
         H2: Overview\n\
         - Free consultation\n",
    );
    write(
        dir,
        "auto.txt",
        "ENHANCED BODY CONTENT:\n\
         H2: After a crash\n\
         - Do I need a lawyer?\n\
         Answer: Usually.\n",
    );
}

#[test]
fn test_build_writes_pages_and_skips_failures() {
    let content = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    seed_content(content.path());

    let builder = SiteBuilder::new(site_config(content.path(), output.path())).unwrap();
    let report = builder.build();

    assert_eq!(report.pages.len(), 3);
    assert_eq!(report.written(), 2);
    assert_eq!(report.failed(), 1);

    let paths: Vec<_> = report.pages.iter().map(|p| p.path()).collect();
    assert_eq!(
        paths,
        vec!["/personal-injury", "/personal-injury/auto-accidents", "/missing"]
    );
    assert!(matches!(report.pages[2], PageOutcome::Skipped { .. }));

    let home = fs::read_to_string(output.path().join("personal-injury/index.html")).unwrap();
    assert!(home.contains("<title>Personal Injury | Example Lawyers</title>"));
    assert!(home.contains("<meta name=\"description\" content=\"Injury help.\">"));
    assert!(home.contains("href=\"https://www.example.com/personal-injury\""));
    assert!(home.contains("<ul><li>Free consultation</li></ul>"));
    assert!(home.contains("class=\"btn-primary\""));
    assert!(home.contains(
        "<li><a href=\"/personal-injury/auto-accidents\">/personal-injury/auto-accidents</a></li>"
    ));

    let auto = fs::read_to_string(
        output
            .path()
            .join("personal-injury/auto-accidents/index.html"),
    )
    .unwrap();
    assert!(auto.contains("<title>auto accidents | Example Lawyers</title>"));
    assert!(auto.contains("<h4>Do I need a lawyer?</h4><p>Usually.</p>"));
    assert!(auto.contains("<li><a href=\"/personal-injury\">Personal Injury</a></li>"));

    assert!(!output.path().join("missing").exists());
}

#[test]
fn test_sequential_and_parallel_builds_match() {
    let content = tempfile::tempdir().unwrap();
    seed_content(content.path());

    let out_a = tempfile::tempdir().unwrap();
    let out_b = tempfile::tempdir().unwrap();

    let parallel = SiteBuilder::new(site_config(content.path(), out_a.path()))
        .unwrap()
        .build();
    let sequential = SiteBuilder::new(site_config(content.path(), out_b.path()))
        .unwrap()
        .sequential()
        .build();

    assert_eq!(parallel.written(), sequential.written());
    for file in ["personal-injury/index.html", "personal-injury/auto-accidents/index.html"] {
        assert_eq!(
            fs::read_to_string(out_a.path().join(file)).unwrap(),
            fs::read_to_string(out_b.path().join(file)).unwrap()
        );
    }
}

#[test]
fn test_progress_callback_sees_every_page() {
    let content = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    seed_content(content.path());

    let seen = std::sync::Mutex::new(Vec::new());
    let builder = SiteBuilder::new(site_config(content.path(), output.path())).unwrap();
    builder.build_with_progress(|outcome| {
        seen.lock().unwrap().push(outcome.path().to_string());
    });

    let mut seen = seen.into_inner().unwrap();
    seen.sort();
    assert_eq!(
        seen,
        vec!["/missing", "/personal-injury", "/personal-injury/auto-accidents"]
    );
}

#[test]
fn test_custom_template_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let content_dir = dir.path().join("content");
    fs::create_dir(&content_dir).unwrap();
    write(&content_dir, "a.txt", "ENHANCED BODY CONTENT:\nH1: Page A\n");
    write(dir.path(), "page.html", "<h1>{{h1}}</h1>{{body}}");

    let toml = format!(
        r#"
content_base = "{}"
output_dir = "{}"
template = "page.html"
call_to_action = ""

[[pages]]
path = "/a"
file = "a.txt"
"#,
        content_dir.display().to_string().replace('\\', "/"),
        dir.path().join("out").display().to_string().replace('\\', "/"),
    );
    let config_path = dir.path().join("site.toml");
    fs::write(&config_path, toml).unwrap();

    let config = SiteConfig::load_from_path(&config_path).unwrap();
    assert_eq!(config.template, Some(dir.path().join("page.html")));

    let report = SiteBuilder::new(config).unwrap().build();
    assert_eq!(report.written(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("out/a/index.html")).unwrap(),
        "<h1>Page A</h1>"
    );
}

#[test]
fn test_build_with_explicit_source() {
    let content = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write(content.path(), "x.txt", "no marker at all");

    let mut config = SiteConfig {
        output_dir: output.path().to_path_buf(),
        call_to_action: "<p>cta</p>".to_string(),
        ..Default::default()
    };
    config.pages = vec![PageSpec::new("/x", "x.txt")];

    let builder = SiteBuilder::with_source(config, Arc::new(DirSource::new(content.path())))
        .with_template(PageTemplate::new("{{h1}}:{{body}}"));
    let report = builder.build();

    assert_eq!(report.written(), 1);
    assert_eq!(
        fs::read_to_string(output.path().join("x/index.html")).unwrap(),
        "x:<p>cta</p>"
    );
}

#[test]
fn test_single_page_in_builtin_shell() {
    let content = tempfile::tempdir().unwrap();
    write(content.path(), "x.txt", "ENHANCED BODY CONTENT:\nH1: T\n");

    let builder =
        SiteBuilder::with_source(SiteConfig::default(), Arc::new(DirSource::new(content.path())));
    let html = builder.build_page(&PageSpec::new("/x", "x.txt")).unwrap().html;

    assert!(html.contains(&format!("<title>T | {}</title>", DEFAULT_BRAND)));
    assert!(html.contains("<nav class=\"header-nav\">"));
    assert!(html.contains("Attorney advertising."));
    assert!(html.contains(&format!("DBA {}.", DEFAULT_BRAND)));
    // Header button and call to action.
    assert_eq!(html.matches("<a href=\"tel:844-467-4335\" class=\"btn-secondary\"").count(), 2);
    assert!(!html.contains("{{"));
}

#[test]
fn test_example_config_lists_every_page() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("site.example.toml");
    let config = SiteConfig::load_from_path(&path).unwrap();

    assert_eq!(config.pages.len(), 42);
    assert!(config
        .pages
        .iter()
        .any(|p| p.path == "/personal-injury/wrongful-death"));
    assert_eq!(config.label_for("/personal-injury-court"), "Do I Have to Go to Court?");
    assert_eq!(config.content_dir, "CONTENT_ENRICHED");
}
