//! Catalog listing.

use costgen_core::ServiceKind;
use costgen_generator::catalog;
use std::fmt::Write;

/// One line per catalog entry: `<service>\t<column>\t<identifier>`.
pub fn render_catalog(service: Option<ServiceKind>) -> String {
    let kinds = match service {
        Some(kind) => vec![kind],
        None => ServiceKind::ALL.to_vec(),
    };

    let mut out = String::new();
    for kind in kinds {
        let (column, ids) = catalog(kind);
        for id in ids {
            let _ = writeln!(out, "{kind}\t{column}\t{id}");
        }
    }
    out
}
