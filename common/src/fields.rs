//! Field metadata for the support-call log sheet
//!
//! One static table drives the review table, the clipboard rendering and the
//! summary statistics. Keys are the camelCase names used in the JSON export.

/// Display metadata for one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// camelCase key, matches the JSON export.
    pub key: &'static str,
    /// Human-readable label shown in the table and clipboard text.
    pub label: &'static str,
    /// Icon glyph rendered next to the label.
    pub icon: &'static str,
}

/// All record fields, in display order.
pub const FIELDS: [FieldDef; 14] = [
    FieldDef { key: "branchCode", label: "Branch Code", icon: "🏢" },
    FieldDef { key: "address", label: "Address", icon: "📍" },
    FieldDef { key: "city", label: "City", icon: "📍" },
    FieldDef { key: "model", label: "Model", icon: "🖥️" },
    FieldDef { key: "region", label: "Region", icon: "🌐" },
    FieldDef { key: "customerRequest", label: "Customer Request / Reported Problem", icon: "💬" },
    FieldDef { key: "problemDescription", label: "Problem Description by Engineer", icon: "📄" },
    FieldDef { key: "actionTaken", label: "Action Taken by Engineer", icon: "🔧" },
    FieldDef { key: "faultyPartHandedOver", label: "Faulty Part Handed Over", icon: "📦" },
    FieldDef { key: "handedOverTo", label: "Handed Over To", icon: "👥" },
    FieldDef { key: "nameOfBranchPerson", label: "Name of Branch Person", icon: "👤" },
    FieldDef { key: "branchPersonDesignation", label: "Branch Person Designation", icon: "💳" },
    FieldDef { key: "bankName", label: "Bank Name", icon: "🏛️" },
    FieldDef { key: "branchLocation", label: "Branch Location", icon: "📍" },
];

/// Label for a field key, `None` for unknown keys.
pub fn label_for(key: &str) -> Option<&'static str> {
    FIELDS.iter().find(|f| f.key == key).map(|f| f.label)
}

/// Field key for a label, `None` for unknown labels.
pub fn key_for_label(label: &str) -> Option<&'static str> {
    FIELDS.iter().find(|f| f.label == label).map(|f| f.key)
}
