//! Static font-metric table for the letter body font (Helvetica).
//!
//! Character widths are in em units (relative to font size), taken from the
//! Adobe AFM widths for the standard-14 Helvetica. The PDF writer uses the
//! built-in (non-embedded) Helvetica, so these are the exact advance widths
//! the viewer will use — the wrap decisions below match the rendered output.
//!
//! The table covers ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

// ────────────────────────────────────────────────────────────────────────────
// Layout configuration
// ────────────────────────────────────────────────────────────────────────────

/// Fixed page geometry for rendered letters. All values in points.
///
/// `max_text_width()` is the usable line width; `first_baseline()` is the
/// y position (from the page bottom) of the first line on every page.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// Inset on all four sides.
    pub margin: f32,
    pub font_size: f32,
    /// Vertical advance per line.
    pub line_height: f32,
}

impl LayoutConfig {
    pub fn max_text_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn first_baseline(&self) -> f32 {
        self.page_height - self.margin
    }
}

impl Default for LayoutConfig {
    /// US letter (612 × 792 pt), 40 pt margins, Helvetica 12 pt, 14 pt leading.
    fn default() -> Self {
        LayoutConfig {
            page_width: 612.0,
            page_height: 792.0,
            margin: 40.0,
            font_size: 12.0,
            line_height: 14.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font.
///
/// All widths are in em units at 1em (i.e., at the configured font size).
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space)
/// through 0x7E (~).
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetrics {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetrics {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_em(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures the rendered width of a string in points at the given font size.
    pub fn measure_pt(&self, s: &str, font_size: f32) -> f32 {
        self.measure_em(s) * font_size
    }

    /// Space advance in points at the given font size.
    pub fn space_pt(&self, font_size: f32) -> f32 {
        self.space_width * font_size
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width table  (95 ASCII printable characters)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica — Adobe AFM advance widths, /1000 em.
static HELVETICA_TABLE: FontMetrics = FontMetrics {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    space_width: 0.278,
};

/// Returns the static metric table for the letter body font.
pub fn helvetica() -> &'static FontMetrics {
    &HELVETICA_TABLE
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_em_empty_returns_zero() {
        assert_eq!(helvetica().measure_em(""), 0.0);
    }

    #[test]
    fn test_measure_em_single_space() {
        let width = helvetica().measure_em(" ");
        assert!(
            (width - 0.278).abs() < 1e-4,
            "space width should be 0.278, got {width}"
        );
    }

    #[test]
    fn test_measure_em_ascii_characters() {
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = helvetica().measure_em("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_em_non_ascii_falls_back() {
        let metrics = helvetica();
        // "é" is non-ASCII → falls back to average_char_width
        let width = metrics.measure_em("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_measure_pt_scales_with_font_size() {
        let metrics = helvetica();
        let at_12 = metrics.measure_pt("Rust", 12.0);
        assert!(
            (at_12 - 2.056 * 12.0).abs() < 1e-2,
            "Rust at 12pt should be ~24.67pt, got {at_12}"
        );
        assert!(
            (metrics.measure_pt("Rust", 24.0) - 2.0 * at_12).abs() < 1e-2,
            "doubling the font size should double the width"
        );
    }

    #[test]
    fn test_default_layout_config_sanity() {
        let config = LayoutConfig::default();
        assert_eq!(config.page_width, 612.0);
        assert_eq!(config.page_height, 792.0);
        assert_eq!(config.margin, 40.0);
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.line_height, 14.0);
        assert_eq!(config.max_text_width(), 532.0);
        assert_eq!(config.first_baseline(), 752.0);
    }
}
