use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const WIDGET_FILES: [&str; 6] = [
    "mod.rs",
    "command.rs",
    "event.rs",
    "model.rs",
    "reducer.rs",
    "state.rs",
];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    let mut widget_dirs = BTreeSet::new();
    for path in read_dir(&widgets_dir) {
        if path.is_dir() {
            widget_dirs.insert(file_stem(&path));
        } else if path.file_name().is_some_and(|name| name != "mod.rs") {
            violations.push(format!(
                "{}: widgets must live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != widget_dirs {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            widget_dirs
        ));
    }

    for widget in &declared_modules {
        validate_widget_dir(&widgets_dir.join(widget), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, violations: &mut Vec<String>) {
    for required in WIDGET_FILES {
        if !dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing required widget file {required}",
                dir.display()
            ));
        }
    }

    let view_dir = dir.join("view");
    if !view_dir.is_dir() {
        violations.push(format!("{}: missing view directory", dir.display()));
    }

    for path in read_dir(dir) {
        if is_rust_file(&path) {
            validate_side_effects(&path, false, violations);
        }
    }

    if !view_dir.is_dir() {
        return;
    }
    for path in read_dir(&view_dir) {
        if !is_rust_file(&path) {
            continue;
        }
        validate_side_effects(&path, true, violations);
        if path.file_name().is_some_and(|name| name != "mod.rs") {
            validate_view_file(&path, violations);
        }
    }
}

/// Widget code stays pure: IO, async work and clocks belong to routers.
fn validate_side_effects(
    file_path: &Path,
    is_view: bool,
    violations: &mut Vec<String>,
) {
    let source = read(file_path);
    let production = production_source(&source);

    let mut forbidden = vec![
        "std::fs::",
        "std::process::Command",
        "Task::perform",
        "crate::app::",
        "crate::routers",
        "crate::storage",
    ];
    if is_view {
        forbidden.extend(["log::", "Task::"]);
    }
    for pattern in forbidden {
        if production.contains(pattern) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {pattern}",
                file_path.display()
            ));
        }
    }
    for pattern in ["Instant::now", ".elapsed("] {
        if production.contains(pattern) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {pattern}",
                file_path.display()
            ));
        }
    }

    let file = parse(file_path);
    for item in &file.items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            }
        }
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse(file_path);
    let expected_prefix = snake_to_pascal_case(&file_stem(file_path));

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with file prefix '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

/// Source text before the unit test module.
fn production_source(source: &str) -> &str {
    source
        .find("#[cfg(test)]\nmod tests")
        .map_or(source, |index| &source[..index])
}

fn read_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn is_rust_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "rs")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
