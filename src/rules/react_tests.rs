use super::*;
use crate::rules::test_support::{Project, entry};

#[test]
fn class_component_is_reported_with_its_file() {
    let project = Project::new().file(
        "src/Legacy.tsx",
        "export class Foo extends React.Component {\n  render() { return null; }\n}\n",
    );

    let results = project.run(&ReactRules);

    let failed = entry(results.failed(), "class components found").unwrap();
    assert_eq!(failed, "1 class components found. Use functions.\nsrc/Legacy.tsx");
}

#[test]
fn no_class_components_passes() {
    let project = Project::new().file("src/App.tsx", "export const App = () => null;\n");

    let results = project.run(&ReactRules);

    assert!(results.passed().contains(&"No class components found.".to_string()));
    assert!(entry(results.failed(), "class components").is_none());
}

#[test]
fn bare_component_base_class_is_detected() {
    let project = Project::new().file("src/A.jsx", "class A extends Component {}\n");

    let results = project.run(&ReactRules);

    assert!(entry(results.failed(), "1 class components found").is_some());
}

#[test]
fn non_react_files_are_not_scanned() {
    let project = Project::new().file("src/model.ts", "class A extends React.Component {}\n");

    let results = project.run(&ReactRules);

    assert!(entry(results.failed(), "class components found").is_none());
}

#[test]
fn inline_styles_and_fc_types_count_files() {
    let project = Project::new()
        .file(
            "src/A.tsx",
            "const A: FC<Props> = () => <div style={{ a: 1 }} style={{ b: 2 }} />;\n",
        )
        .file("src/B.tsx", "const B: React.FunctionComponent<P> = () => null;\n");

    let results = project.run(&ReactRules);

    assert_eq!(
        entry(results.failed(), "inline style").unwrap(),
        "1 inline style instances found. Use modules.\nsrc/A.tsx"
    );
    assert_eq!(
        entry(results.failed(), "FC/FunctionComponent").unwrap(),
        "2 uses of FC/FunctionComponent type found. Avoid them.\nsrc/A.tsx\nsrc/B.tsx"
    );
}

#[test]
fn missing_error_boundaries_and_lazy_loading_fail() {
    let project = Project::new().file("src/App.tsx", "export const App = () => null;\n");

    let results = project.run(&ReactRules);

    assert!(results.failed().contains(
        &"No error boundaries found. Use them for graceful error handling.".to_string()
    ));
    assert!(
        results
            .failed()
            .contains(&"No lazy loading found. Use it for conditional components.".to_string())
    );
}

#[test]
fn error_boundaries_and_lazy_loading_pass_with_counts() {
    let project = Project::new()
        .file(
            "src/Boundary.tsx",
            "class B extends Component { componentDidCatch() {} }\n",
        )
        .file("src/routes.tsx", "const Page = React.lazy(() => import('./Page'));\n");

    let results = project.run(&ReactRules);

    assert!(results.passed().contains(&"1 error boundaries found.".to_string()));
    assert!(results.passed().contains(&"1 lazy-loaded components found.".to_string()));
}

#[test]
fn direct_props_access_skips_this_props() {
    let project = Project::new().file(
        "src/A.tsx",
        "const a = props.title;\nconst b = this.props.body;\nconst c = props.footer;\n",
    );

    let results = project.run(&ReactRules);

    assert_eq!(
        entry(results.warnings(), "direct props access").unwrap(),
        "Found 2 instances of direct props access. Consider destructuring.\n  src/A.tsx (2 instances)"
    );
}

#[test]
fn conditional_renders_warn_only_above_limit() {
    let few = "{a && <A />}\n".repeat(CONDITIONAL_RENDER_LIMIT);
    let project = Project::new().file("src/Few.tsx", &few);
    let results = project.run(&ReactRules);
    assert!(
        results
            .passed()
            .contains(&"Reasonable use of conditional rendering.".to_string())
    );

    let many = "{a ? <A /> : <B />}\n".repeat(CONDITIONAL_RENDER_LIMIT + 1);
    let project = Project::new().file("src/Many.tsx", &many);
    let results = project.run(&ReactRules);
    assert_eq!(
        entry(results.warnings(), "conditional renders").unwrap(),
        "Found 11 conditional renders. Consider extracting complex conditions into components.\n  src/Many.tsx (11 conditionals)"
    );
}

#[test]
fn every_check_records_exactly_one_entry() {
    let project = Project::new().file("src/App.tsx", "export const App = () => null;\n");

    let summary = project.run(&ReactRules).summary();

    assert_eq!(summary.total, 7);
}
