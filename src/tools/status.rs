//! Whimsy Status Tool
//!
//! Provides runtime status information about the converter service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Converter usage instructions for AI assistants
pub const CONVERTER_INSTRUCTIONS: &str = r#"
# Whimsy Measurement Converter Instructions

This guide explains how to convert measurements into quirky, relatable units.

## Overview

Whimsy turns boring measurements into delightful comparisons:
- "1500 kg" becomes "333.3 House Cats"
- "10 km" becomes "50,000 Bananas"
- "2 hours" becomes "24,000 Blinks of an Eye"

## Main Workflow

1. Call `convert_measurement` with the user's query as-is:
   ```
   convert_measurement(query: "1500 kg in cats")
   ```
2. Present the `quirkyAmountDisplay` and `funFact` fields to the user.

The query parser understands:
- A number followed by a unit: "1500 kg", "2.5 tonnes", "10km"
- An optional target unit: "in cats", "in dog years"
- Category keywords when no unit is present: "how heavy", "how fast"

## Supported Units

| Category | Base unit | Recognized aliases |
|----------|-----------|--------------------|
| Weight | kg | lb, lbs, pound(s), g, gram(s), t, tonne(s), ton(s) |
| Length | m | cm, mm, km, in(ch/es), ft, foot, feet, mi, mile(s) |
| Volume | l | ml, milliliter(s), gal, gallon(s) |
| Time | s | min, minute(s), h, hr, hour(s), d, day(s), y, yr, year(s) |
| Speed | kph | mph, m/s |

Unrecognized unit spellings pass through unchanged and will usually fail
to match a catalog category. Prefer the short aliases above (use "kg",
not "kilograms").

## Other Tools

| Task | Tool |
|------|------|
| Convert a query | `convert_measurement` |
| Inspect parsing only | `parse_measurement_query` |
| Browse the full catalog | `list_quirky_units` |
| Browse one category | `list_quirky_units_by_category` |
| Add a catalog entry | `add_quirky_unit` |
| Review recent conversions | `recent_conversions` |
| Check service health | `whimsy_status` |

## Adding Catalog Entries

New quirky units must be stored in their category's base unit:

```
add_quirky_unit(
  name: "Garden Gnome",
  name_plural: "Garden Gnomes",
  value: 1.5,          // kilograms, because category is weight
  unit: "kg",
  category: "weight",
  icon: "🧙",
  description: "A classic ceramic garden gnome"
)
```

## Notes

- Conversions pick the unit giving the most pleasant count (roughly
  between 1 and 1000); an explicit "in X" target overrides this.
- Every conversion is recorded in history automatically.
- Error "Invalid measurement" means no positive value and unit were
  found in the query; rephrase with an explicit number and unit.
"#;

/// Runtime status of the Whimsy service
#[derive(Debug, Clone, Serialize)]
pub struct WhimsyStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Database information
    pub database_path: String,
    pub database_size_bytes: Option<u64>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> WhimsyStatus {
        let build_info = BuildInfo::current();

        // Get database size if it exists
        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        WhimsyStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_process_info() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/whimsy.db"));
        let status = tracker.get_status();

        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.database_path, "/nonexistent/whimsy.db");
    }
}
