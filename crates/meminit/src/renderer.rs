// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Prints an [`InitModule`] as Verilog source.

use crate::ir::{InitModule, Region, Statement};
use crate::writer::{render_to_string, VerilogWriter};

/// Render the whole module. The text ends at `endmodule`, with no trailing
/// newline.
pub fn render_module(module: &InitModule) -> String {
    render_to_string(|w| {
        w.line_fmt(format_args!("module {};", module.name));
        w.line_fmt(format_args!("integer {};", module.counter));

        for region in &module.regions {
            w.newline();
            render_region(w, region);
        }

        w.write("endmodule");
    })
}

/// A region's statements end with a newline. An empty region still leaves an
/// empty line after its title comment.
fn render_region(w: &mut VerilogWriter, region: &Region) {
    w.line_fmt(format_args!("// {}", region.title));
    w.indent();
    if region.statements.is_empty() {
        w.newline();
    }
    for stmt in &region.statements {
        render_statement(w, stmt);
    }
    w.dedent();
}

pub fn render_statement(w: &mut VerilogWriter, stmt: &Statement) {
    match stmt {
        Statement::Assign {
            memory,
            index,
            word,
        } => w.line_fmt(format_args!("{memory}[{index}] = 32'h{word};")),
        Statement::ZeroFill {
            memory,
            counter,
            start,
            end,
        } => {
            w.line_fmt(format_args!(
                "for ({counter} = {start}; {counter} < {end}; {counter} = {counter} + 1) begin"
            ));
            w.indent();
            w.line_fmt(format_args!("{memory}[{counter}] = 32'h0;"));
            w.dedent();
            w.line("end");
        }
    }
}
