//! Stylesheet assembly.

use std::fmt::Write;

use frameprint_core::{FontName, FrameNode};

use crate::context::ProcessingContext;
use crate::options::ExportOptions;
use crate::Result;

const HEADER: &str = "/* Generated by frameprint */\n\n";

const RESETS: &str = "body {
    margin: 0;
    font-family: sans-serif;
    box-sizing: border-box;
}

*, *::before, *::after {
    box-sizing: inherit;
}

img { max-width: 100%; height: auto; display: block; }

.image-container img { width: 100%; height: auto; }

";

/// Assemble the stylesheet for a finished run.
///
/// Layout: header comment, `@page` sized to the root frame, resets, one
/// `@font-face` per distinct font, then one block per registered class in
/// registration order.
pub fn assemble(root: &FrameNode, ctx: &ProcessingContext, options: &ExportOptions) -> Result<String> {
    let mut css = String::from(HEADER);

    write!(css, "@page {{\n    size: {}px {}px;\n    margin: 0;\n}}\n\n", root.width, root.height)?;
    css.push_str(RESETS);

    for font in ctx.assets.fonts() {
        write_font_face(&mut css, font, &options.font_dir)?;
    }

    for (class_name, rules) in ctx.classes.iter() {
        writeln!(css, ".{} {{", class_name)?;
        for rule in rules {
            writeln!(css, "    {}", rule)?;
        }
        css.push_str("}\n\n");
    }

    Ok(css)
}

fn write_font_face(css: &mut String, font: &FontName, font_dir: &str) -> std::fmt::Result {
    writeln!(css, "@font-face {{")?;
    writeln!(css, "    font-family: '{}';", font.family)?;
    writeln!(css, "    font-style: {};", font.css_style())?;
    writeln!(css, "    font-weight: {};", font.weight().value())?;
    writeln!(css, "    src: url('{}{}');", font_dir, font_file_name(font))?;
    css.push_str("}\n\n");
    Ok(())
}

/// File name a font is expected under: `Open Sans` / `Bold Italic` -> `OpenSans-BoldItalic.ttf`.
pub fn font_file_name(font: &FontName) -> String {
    format!("{}-{}.ttf", strip_spaces(&font.family), strip_spaces(&font.style))
}

fn strip_spaces(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
