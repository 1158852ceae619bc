use crate::round_one_decimal;
use derive_more::Constructor;
use log::debug;
use std::fmt::Display;

/// One export of the simulated `utils.js` module.
#[derive(Debug, PartialEq, Eq)]
pub struct UtilityFunction {
    pub name: &'static str,
    pub code: &'static str,
    pub size: u32,
}

/// Fixed per-bundle overhead in bytes, charged even for an empty selection.
pub const BASE_BUNDLE_SIZE: u32 = 50;

pub const UTILITY_FUNCTIONS: [UtilityFunction; 5] = [
    UtilityFunction {
        name: "formatDate",
        code: "export function formatDate(date) { return date.toLocaleDateString(); }",
        size: 68,
    },
    UtilityFunction {
        name: "formatCurrency",
        code: "export function formatCurrency(amount) { return `$${amount.toFixed(2)}`; }",
        size: 79,
    },
    UtilityFunction {
        name: "validateEmail",
        code: "export function validateEmail(email) { return /^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$/.test(email); }",
        size: 96,
    },
    UtilityFunction {
        name: "debounce",
        code: "export function debounce(fn, delay) { let timer; return (...args) => { clearTimeout(timer); timer = setTimeout(() => fn(...args), delay); }; }",
        size: 144,
    },
    UtilityFunction {
        name: "deepClone",
        code: "export function deepClone(obj) { return JSON.parse(JSON.stringify(obj)); }",
        size: 75,
    },
];

pub fn function(name: &str) -> Option<&'static UtilityFunction> {
    UTILITY_FUNCTIONS.iter().find(|function| function.name == name)
}

/// View state of the tree-shaking widget: which functions the reader imports
/// and whether the bundle has been "built".
///
/// Selection keeps insertion order because the import preview lists functions
/// in the order they were picked; the sums do not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeShakingDemo {
    selected: Vec<&'static str>,
    built: bool,
}

impl TreeShakingDemo {
    /// Adds `name` to the selection if absent, removes it if present, and
    /// hides any previously built bundle. Names not in the module table are
    /// ignored.
    pub fn toggle(self, name: &str) -> Self {
        let function = match function(name) {
            Some(function) => function,
            None => {
                debug!("Ignoring toggle of unknown utility function {}", name);
                return self;
            }
        };
        let mut selected = self.selected;
        match selected.iter().position(|&chosen| chosen == function.name) {
            Some(index) => {
                selected.remove(index);
            }
            None => selected.push(function.name),
        }
        TreeShakingDemo {
            selected,
            built: false,
        }
    }

    /// Builds the bundle. A no-op while nothing is selected; the widget
    /// disables the action in that case.
    pub fn build(self) -> Self {
        if !self.can_build() {
            return self;
        }
        TreeShakingDemo { built: true, ..self }
    }

    pub fn reset(self) -> Self {
        TreeShakingDemo::default()
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn can_build(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|&chosen| chosen == name)
    }

    pub fn bundle_size(&self) -> u32 {
        let selected_size: u32 = UTILITY_FUNCTIONS
            .iter()
            .filter(|function| self.is_selected(function.name))
            .map(|function| function.size)
            .sum();
        BASE_BUNDLE_SIZE + selected_size
    }

    pub fn eliminated_size(&self) -> u32 {
        UTILITY_FUNCTIONS
            .iter()
            .filter(|function| !self.is_selected(function.name))
            .map(|function| function.size)
            .sum()
    }

    pub fn full_module_size(&self) -> u32 {
        BASE_BUNDLE_SIZE + UTILITY_FUNCTIONS.iter().map(|function| function.size).sum::<u32>()
    }

    /// The import line previewed above the build button.
    pub fn import_statement(&self) -> String {
        if self.selected.is_empty() {
            return "// pick the functions to import".to_string();
        }
        format!("import {{ {} }} from './utils';", self.selected.join(", "))
    }

    pub fn report(&self) -> BundleReport {
        let bundle_size = self.bundle_size();
        let full_module_size = self.full_module_size();
        let reduction = (full_module_size - bundle_size) as f32 / full_module_size as f32 * 100.0;
        BundleReport::new(
            bundle_size,
            self.eliminated_size(),
            full_module_size,
            round_one_decimal(reduction),
        )
    }
}

/// Derived bundle numbers, recomputed from the selection on demand.
#[derive(Debug, PartialEq, Constructor)]
pub struct BundleReport {
    pub bundle_size: u32,
    pub eliminated_size: u32,
    pub full_module_size: u32,
    pub reduction_percent: f32,
}

impl Display for BundleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "bundle: {} bytes\tremoved: {} bytes\tfull module: {} bytes\treduction: {:.1}%",
            self.bundle_size, self.eliminated_size, self.full_module_size, self.reduction_percent
        ))
    }
}

/// Tests

#[test]
fn empty_selection_is_base_overhead_only() {
    let demo = TreeShakingDemo::default();
    assert_eq!(demo.bundle_size(), BASE_BUNDLE_SIZE);
    assert!(!demo.can_build());
    assert!(!demo.build().is_built(), "build must stay disabled with nothing selected");
}

#[test]
fn full_selection_eliminates_nothing() {
    let mut demo = TreeShakingDemo::default();
    for function in &UTILITY_FUNCTIONS {
        demo = demo.toggle(function.name);
    }
    let report = demo.report();
    assert_eq!(report.bundle_size, 512);
    assert_eq!(report.eliminated_size, 0);
    assert_eq!(report.full_module_size, 512);
    assert_eq!(report.reduction_percent, 0.0);
}

#[test]
fn toggle_twice_restores_selection() {
    let demo = TreeShakingDemo::default().toggle("debounce").toggle("deepClone");
    let toggled = demo.clone().toggle("formatDate").toggle("formatDate");
    assert_eq!(toggled.selected(), demo.selected());
}

#[test]
fn toggle_resets_built_flag() {
    let demo = TreeShakingDemo::default().toggle("debounce").build();
    assert!(demo.is_built());
    assert!(!demo.toggle("deepClone").is_built());
}

#[test]
fn unknown_function_is_ignored() {
    let demo = TreeShakingDemo::default().toggle("leftPad");
    assert_eq!(demo, TreeShakingDemo::default());
}

#[test]
fn partial_selection_numbers() {
    let demo = TreeShakingDemo::default().toggle("formatDate").toggle("validateEmail");
    let report = demo.report();
    assert_eq!(report.bundle_size, 50 + 68 + 96);
    assert_eq!(report.eliminated_size, 79 + 144 + 75);
    // (512 - 214) / 512
    assert_eq!(report.reduction_percent, 58.2);
}

#[test]
fn reset_clears_selection_and_bundle() {
    let demo = TreeShakingDemo::default().toggle("debounce").build().reset();
    assert_eq!(demo, TreeShakingDemo::default());
}

#[test]
fn import_statement_lists_selection_in_pick_order() {
    let demo = TreeShakingDemo::default().toggle("deepClone").toggle("formatDate");
    assert_eq!(demo.import_statement(), "import { deepClone, formatDate } from './utils';");
    assert_eq!(
        TreeShakingDemo::default().import_statement(),
        "// pick the functions to import"
    );
}
