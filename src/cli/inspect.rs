// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `enumtab inspect`: the name table of one type, drawn.
//!
//! ```text
//! ╔════════════════════════════════════╗
//! ║         Day  [int]  7 values       ║
//! ╚════════════════════════════════════╝
//! ┌─ NAME BLOB (50 bytes) ─────────────┐
//! │ MondayTuesdayWednesday...          │
//! ├─ KEY → NAME ───────────────────────┤
//! │      0  [0:6]     Monday           │
//! └────────────────────────────────────┘
//! ```

use enumtab::GeneratedArtifact;

use super::display::{
    byte_range, key_value, kind_badge, pad_right, row, section_bot, section_mid, section_top,
    themed, title_box, wrap_chars, BOX_WIDTH, CYAN, DIM, GRAY,
};

/// Width of the key column: the widest key, at least 3.
fn key_width(artifact: &GeneratedArtifact) -> usize {
    artifact
        .keys
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(0)
        .max(3)
}

pub fn print_layout(artifact: &GeneratedArtifact) {
    title_box(&format!(
        "{}  {}  {} values",
        artifact.type_name,
        kind_badge(artifact.keys.kind.go_name()),
        artifact.len()
    ));

    section_top(&format!("NAME BLOB ({} bytes)", artifact.blob.len()));
    for line in wrap_chars(&artifact.blob, BOX_WIDTH - 2) {
        row(&format!(" {}", line));
    }

    section_mid("KEY → NAME");
    let width = key_width(artifact);
    let range_width = format!("[{}:{}]", artifact.blob.len(), artifact.blob.len()).len();
    for (i, (value, name)) in artifact.entries().enumerate() {
        let range = &artifact.names[i];
        row(&format!(
            " {}  {}  {}",
            key_value(value, width),
            pad_right(&byte_range(range.start, range.end), range_width),
            themed(CYAN, &[], name)
        ));
    }

    section_mid("ACCESSOR");
    row(&format!(
        " {}",
        themed(
            GRAY,
            &[DIM],
            &format!("func (i {}) GetEnumSlices() ([]interface{{}}, []string)", artifact.type_name)
        )
    ));
    section_bot();
}

/// Serialize the artifact for `--json`.
pub fn to_json(artifact: &GeneratedArtifact) -> Result<String, String> {
    serde_json::to_string_pretty(artifact).map_err(|e| format!("Failed to serialize artifact: {}", e))
}
