//! # QR Module Extraction & Render Sizing
//!
//! Turns a string into a renderable boolean grid and decides how big each
//! module cell gets on screen.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "https://example.com"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  qrcode crate (mode selection, Reed-Solomon, mask choice)              │
//! │       │              error-correction level fixed at M                  │
//! │       ▼                                                                 │
//! │  extract_modules ──► QrMatrix (size × size booleans)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cell_layout(target_px, size) ──► CellLayout                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  host UI paints one rect per dark module                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The matrix is recomputed per render call and never cached beyond it; for
//! equal input the grid is identical on every call, so memoizing is the
//! caller's choice, not a correctness concern.

use qrcode::{Color, EcLevel, QrCode};
use serde::Serialize;
use ts_rs::TS;

use crate::error::{RenderError, RenderResult};

// =============================================================================
// QR Module Matrix
// =============================================================================

/// A square grid of QR modules. `true` is a dark module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct QrMatrix {
    size: usize,
    /// Row-major, `size * size` entries.
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Side length in modules. Symbology-determined (QR version), not
    /// configurable by the caller.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at (x, y) is dark. Out-of-range coordinates are
    /// light, so edge-walking render loops need no bounds fiddling.
    #[inline]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.modules[y * self.size + x]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.modules.chunks(self.size)
    }
}

/// Extracts the module grid for `value` at error-correction level M.
///
/// Symbol construction (mode selection, Reed-Solomon, masking) is the
/// qrcode crate's job; this function only reads the produced grid out.
/// Fails when no QR version can hold the value - never retried, surfaced
/// to the caller as a "cannot render" state distinct from validation
/// failure (validation already succeeded by the time rendering starts).
///
/// ## Example
/// ```rust
/// use scanforge_core::qr::extract_modules;
///
/// let matrix = extract_modules("https://example.com").unwrap();
/// assert_eq!(matrix.size() % 4, 1); // QR sides are 4v + 17
/// ```
pub fn extract_modules(value: &str) -> RenderResult<QrMatrix> {
    let code = QrCode::with_error_correction_level(value, EcLevel::M).map_err(|e| {
        RenderError::CannotRender {
            reason: e.to_string(),
        }
    })?;

    let size = code.width();
    let modules = code
        .to_colors()
        .iter()
        .map(|c| *c == Color::Dark)
        .collect();

    Ok(QrMatrix { size, modules })
}

// =============================================================================
// Render Sizing Policy
// =============================================================================

/// Pixel geometry for painting a module grid into a square of `target_px`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CellLayout {
    /// Width of one module cell, `floor(target_px / module_count)`.
    pub cell_size: u32,
    /// Height of one module cell: one unit taller than the width so rows
    /// overdraw downward and no horizontal seam shows between them. Any
    /// other seam-free fill (overlapping rects, single bitmap blit) is an
    /// acceptable substitute in the host renderer.
    pub cell_height: u32,
    /// The actual painted side length, `cell_size * module_count`.
    /// Always <= `target_px`: never upscaled, so cells stay on whole
    /// pixels and sub-pixel gaps cannot appear.
    pub rendered_size: u32,
}

/// Quantizes a requested pixel size down to whole-pixel module cells.
///
/// ## Example
/// ```rust
/// use scanforge_core::qr::cell_layout;
///
/// let layout = cell_layout(200, 25);
/// assert_eq!(layout.cell_size, 8);
/// assert_eq!(layout.rendered_size, 200);
/// ```
pub fn cell_layout(target_px: u32, module_count: u32) -> CellLayout {
    if module_count == 0 {
        return CellLayout {
            cell_size: 0,
            cell_height: 0,
            rendered_size: 0,
        };
    }

    let cell_size = target_px / module_count;
    CellLayout {
        cell_size,
        cell_height: cell_size + 1,
        rendered_size: cell_size * module_count,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
