//! Resting place for [PresentableMeasurement] -- auto-scaled display of the
//! quantities appearing in the search cost reports.

use std::borrow::Cow;
use once_cell::sync::Lazy;

/// Holds and presents a report quantity with auto-scaling
pub struct PresentableMeasurement {
    pub(crate) value: f64,
    /// := (threshold, scale, unit, format)
    auto_scale: &'static [(f64, f64, Cow<'static, str>, &'static str)],
}

impl std::fmt::Display for PresentableMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (scaled_value, suffix, format) = self.auto_scale.iter()
            .find(|&&(threshold, _, _, _)| self.value >= threshold)
            .map_or(
                (self.value, "<missing_unit_suffix_please_fix>", ":.0"),
                |(_threshold, rate, suffix, format)| (self.value / rate, suffix.as_ref(), *format));
        match format {
            ":.0"  => write!(f, "{:.0}{}",  scaled_value, suffix),
            ":.2"  => write!(f, "{:.2}{}",  scaled_value, suffix),
            ":.3e" => write!(f, "{:.3e}{}", scaled_value, suffix),
            _ => panic!("Unknown format '{format}'. Please update this code")
        }
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a number of element-to-target comparisons"
/// -- exact below 100k, scientific notation above it.
pub fn comparisons_measurement(value: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<(f64, f64, Cow<'static, str>, &'static str)>> = Lazy::new(|| {
        [
            (100_000.0, "cmp", ":.3e"),
            (      1.0, "cmp", ":.0"),
            (      0.0, "cmp", ":.0"),
        ]
        .into_iter()
        .map(|(threshold, suffix, format)| (threshold, 1.0, Cow::Borrowed(suffix), format))
        .collect()
    });

    PresentableMeasurement {
        value,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "an average of comparisons per search".
pub fn comparisons_per_search_measurement(value: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<(f64, f64, Cow<'static, str>, &'static str)>> = Lazy::new(|| {
        [
            (100_000.0, "cmp/search", ":.3e"),
            (      1.0, "cmp/search", ":.2"),
            (      0.0, "cmp/search", ":.2"),
        ]
        .into_iter()
        .map(|(threshold, suffix, format)| (threshold, 1.0, Cow::Borrowed(suffix), format))
        .collect()
    });

    PresentableMeasurement {
        value,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}
