use crate::round_one_decimal;
use derive_more::Constructor;
use log::debug;
use std::fmt::Display;

/// One before/after minification sample. The byte counts are part of the
/// table, not derived from the snippets.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeSample {
    pub name: &'static str,
    pub original: &'static str,
    pub minified: &'static str,
    pub original_size: u32,
    pub minified_size: u32,
}

pub const CODE_SAMPLES: [CodeSample; 3] = [
    CodeSample {
        name: "JavaScript",
        original: r#"// Sum an array of numbers
function calculateSum(numbers) {
  let total = 0;
  for (let i = 0; i < numbers.length; i++) {
    total = total + numbers[i];
  }
  return total;
}

// Usage example
const result = calculateSum([1, 2, 3, 4, 5]);
console.log("sum:", result);"#,
        minified: r#"function calculateSum(n){let t=0;for(let l=0;l<n.length;l++)t+=n[l];return t}const result=calculateSum([1,2,3,4,5]);console.log("sum:",result);"#,
        original_size: 287,
        minified_size: 147,
    },
    CodeSample {
        name: "CSS",
        original: r#".container {
  display: flex;
  justify-content: center;
  align-items: center;
  padding: 20px;
  margin: 10px auto;
  background-color: #ffffff;
  border-radius: 8px;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
}

.title {
  font-size: 24px;
  font-weight: bold;
  color: #333333;
  margin-bottom: 16px;
}"#,
        minified: r#".container{display:flex;justify-content:center;align-items:center;padding:20px;margin:10px auto;background-color:#fff;border-radius:8px;box-shadow:0 2px 4px rgba(0,0,0,.1)}.title{font-size:24px;font-weight:700;color:#333;margin-bottom:16px}"#,
        original_size: 353,
        minified_size: 244,
    },
    CodeSample {
        name: "HTML",
        original: r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sample page</title>
  </head>
  <body>
    <!-- main content -->
    <div class="container">
      <h1>Welcome</h1>
      <p>This is a sample page.</p>
    </div>
  </body>
</html>"#,
        minified: r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"><meta name="viewport" content="width=device-width,initial-scale=1.0"><title>Sample page</title></head><body><div class="container"><h1>Welcome</h1><p>This is a sample page.</p></div></body></html>"#,
        original_size: 409,
        minified_size: 264,
    },
];

/// View state of the comparison widget: which sample is chosen and whether
/// the minified side has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionDemo {
    selected: usize,
    revealed: bool,
}

impl Default for CompressionDemo {
    fn default() -> Self {
        CompressionDemo {
            selected: 0,
            revealed: false,
        }
    }
}

impl CompressionDemo {
    /// Picks the sample at `index` and hides the minified side again.
    /// An out-of-range index leaves the state unchanged.
    pub fn select(self, index: usize) -> Self {
        if index >= CODE_SAMPLES.len() {
            debug!("Ignoring selection of unknown sample index {}", index);
            return self;
        }
        CompressionDemo {
            selected: index,
            revealed: false,
        }
    }

    pub fn select_named(self, name: &str) -> Option<Self> {
        let index = CODE_SAMPLES.iter().position(|sample| sample.name == name)?;
        Some(self.select(index))
    }

    pub fn reveal(self) -> Self {
        CompressionDemo { revealed: true, ..self }
    }

    pub fn sample(&self) -> &'static CodeSample {
        &CODE_SAMPLES[self.selected]
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn report(&self) -> ComparisonReport {
        let sample = self.sample();
        ComparisonReport::new(
            sample.original_size,
            sample.minified_size,
            sample.original_size - sample.minified_size,
            reduction_percent(sample.original_size, sample.minified_size),
        )
    }
}

/// Derived values of the currently selected sample.
#[derive(Debug, PartialEq, Constructor)]
pub struct ComparisonReport {
    pub original_size: u32,
    pub minified_size: u32,
    pub saved_bytes: u32,
    pub reduction_percent: f32,
}

impl Display for ComparisonReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} bytes -> {} bytes\treduced: {:.1}%\tsaved: {} bytes",
            self.original_size, self.minified_size, self.reduction_percent, self.saved_bytes
        ))
    }
}

/// Produces the percentage shown next to the minified snippet, rounded to one
/// decimal point. Zero original size cannot occur in the fixed table but is
/// guarded anyway.
fn reduction_percent(original_size: u32, minified_size: u32) -> f32 {
    if original_size == 0 {
        return 0.0;
    }
    let reduction = (original_size - minified_size) as f32 / original_size as f32 * 100.0;
    round_one_decimal(reduction)
}

/// Tests

#[test]
fn javascript_sample_reduction() {
    let demo = CompressionDemo::default();
    assert_eq!(demo.sample().name, "JavaScript");
    let report = demo.report();
    assert_eq!(report.reduction_percent, 48.8);
    assert_eq!(format!("{:.1}%", report.reduction_percent), "48.8%");
    assert_eq!(report.saved_bytes, 140);
}

#[test]
fn selecting_resets_reveal() {
    let demo = CompressionDemo::default().reveal();
    assert!(demo.revealed());
    let demo = demo.select(1);
    assert!(!demo.revealed());
    assert_eq!(demo.sample().name, "CSS");
}

#[test]
fn reselecting_same_sample_also_hides() {
    let demo = CompressionDemo::default().reveal().select(0);
    assert!(!demo.revealed());
}

#[test]
fn out_of_range_selection_is_ignored() {
    let demo = CompressionDemo::default().reveal();
    assert_eq!(demo.select(99), demo);
}

#[test]
fn select_named_finds_samples() {
    let demo = CompressionDemo::default().select_named("HTML").unwrap();
    assert_eq!(demo.report().reduction_percent, 35.5);
    assert!(CompressionDemo::default().select_named("Fortran").is_none());
}

#[test]
fn zero_original_size_is_guarded() {
    assert_eq!(reduction_percent(0, 0), 0.0);
}
