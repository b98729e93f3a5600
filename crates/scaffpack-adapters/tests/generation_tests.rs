//! End-to-end generation through the real adapters.

use scaffpack_adapters::{
    DefaultsPrompter, DirectoryTemplates, EmbeddedTemplates, LocalFilesystem, MemoryFilesystem,
    ScriptedPrompter, TeraRenderer,
};
use scaffpack_core::application::ScaffoldService;
use serde_json::Value;

fn service(answers: &[&str], fs: MemoryFilesystem) -> ScaffoldService {
    let prompter = ScriptedPrompter::new(Box::new(DefaultsPrompter))
        .with_pairs(answers)
        .unwrap();
    ScaffoldService::new(
        Box::new(prompter),
        Box::new(EmbeddedTemplates::new()),
        Box::new(TeraRenderer::new()),
        Box::new(fs),
    )
}

fn manifest(fs: &MemoryFilesystem, path: &str) -> Value {
    serde_json::from_str(&fs.get(path).unwrap()).unwrap()
}

#[test]
fn typescript_sass_project() {
    let fs = MemoryFilesystem::new();
    let svc = service(
        &[
            "langType=Typescript",
            "devServer=true",
            "htmlWebpackPlugin=true",
            "cssType=SASS",
            "isCSS=true",
            "isPostCSS=false",
            "isExtractPlugin=true",
        ],
        fs.clone(),
    );

    let (outcome, report) = svc.generate("app", false).unwrap();

    assert_eq!(outcome.dependencies.len(), 9);
    assert_eq!(report.file_count(), 6);
    assert!(fs.get("app/tsconfig.json").is_some());
    assert!(fs.get("app/src/index.ts").is_some());
    assert!(fs.get("app/src/index.js").is_none());
    assert!(fs.get("app/postcss.config.js").is_none());

    let config = fs.get("app/webpack.config.js").unwrap();
    assert!(config.contains(r#"entry: "./src/index.ts""#));
    assert!(config.contains("ts-loader"));
    assert!(config.contains("sass-loader"));
    assert!(config.contains("new HtmlWebpackPlugin"));
    assert!(config.contains("MiniCssExtractPlugin.loader"));
    assert!(!config.contains("postcss-loader"));
    assert!(!config.contains("{%"));

    let pkg = manifest(&fs, "app/package.json");
    let dev_deps: Vec<&str> = pkg["devDependencies"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(&dev_deps[..3], &["webpack", "webpack-cli", "typescript"]);
    assert_eq!(pkg["scripts"]["serve"], "webpack serve");
}

#[test]
fn minimal_project() {
    let fs = MemoryFilesystem::new();
    let svc = service(
        &["devServer=false", "htmlWebpackPlugin=false", "cssType=none"],
        fs.clone(),
    );

    let (outcome, _) = svc.generate("app", false).unwrap();

    assert!(outcome.dependencies.is_empty());
    assert!(fs.get("app/src/index.js").is_some());
    for absent in ["app/.babelrc", "app/tsconfig.json", "app/postcss.config.js"] {
        assert!(fs.get(absent).is_none(), "{absent} should not be written");
    }

    let pkg = manifest(&fs, "app/package.json");
    assert!(pkg["scripts"].get("serve").is_none());
    assert_eq!(pkg["devDependencies"].as_object().unwrap().len(), 2);

    let config = fs.get("app/webpack.config.js").unwrap();
    assert!(!config.contains("devServer"));
    assert!(!config.contains("HtmlWebpackPlugin"));
}

#[test]
fn css_only_with_postcss_writes_postcss_config() {
    let fs = MemoryFilesystem::new();
    let svc = service(&["langType=ES6", "cssType=CSS only"], fs.clone());

    svc.generate("app", false).unwrap();

    assert!(fs.get("app/.babelrc").is_some());
    assert!(fs.get("app/postcss.config.js").is_some());
    let config = fs.get("app/webpack.config.js").unwrap();
    assert!(config.contains(r#"use: [stylesHandler, "css-loader", "postcss-loader"]"#));
    assert!(config.contains("babel-loader"));
}

#[test]
fn rerun_preserves_existing_manifest_keys() {
    let fs = MemoryFilesystem::new();
    fs.insert(
        "app/package.json",
        r#"{"name":"mine","private":true,"devDependencies":{"eslint":"^9.0.0"}}"#,
    )
    .unwrap();

    let svc = service(&[], fs.clone());
    svc.generate("app", true).unwrap();
    svc.generate("app", true).unwrap();

    let pkg = manifest(&fs, "app/package.json");
    assert_eq!(pkg["private"], true);
    assert_eq!(pkg["name"], "my-webpack-project");
    assert_eq!(pkg["devDependencies"]["eslint"], "^9.0.0");
    assert_eq!(pkg["devDependencies"]["webpack"], "latest");
}

#[test]
fn force_run_on_disk_with_template_override() {
    let root = tempfile::tempdir().unwrap();
    let overrides = tempfile::tempdir().unwrap();
    std::fs::write(overrides.path().join("README.md"), "# From override\n").unwrap();

    let svc = ScaffoldService::new(
        Box::new(DefaultsPrompter),
        Box::new(DirectoryTemplates::open(overrides.path()).unwrap()),
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let dest = root.path().join("site");
    let (_, report) = svc.generate(&dest, true).unwrap();

    assert_eq!(report.root, dest);
    assert_eq!(
        std::fs::read_to_string(dest.join("README.md")).unwrap(),
        "# From override\n"
    );
    assert!(dest.join("index.html").exists());
    let config = std::fs::read_to_string(dest.join("webpack.config.js")).unwrap();
    assert!(config.contains("devServer"));
}
