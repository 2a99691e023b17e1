//! Human-readable rendering of tool listings.

use std::fmt::Write;

use toolparam_core::{DataType, Parameter, ParameterType};

use crate::listing::ToolListing;

const INDENT: &str = "  ";

/// Render listings as text, one `Tool:` header per tool followed by its
/// parameter tree.
pub fn render_listing(listings: &[ToolListing]) -> String {
    let mut out = String::new();
    for listing in listings {
        write_tool(&mut out, listing);
    }
    out
}

fn write_tool(out: &mut String, listing: &ToolListing) {
    let description = listing.description.as_deref().unwrap_or("");
    writeln!(out, "Tool: - {} - {}", listing.name, description).unwrap();
    write_parameters(out, &listing.parameters, 1);
}

fn write_parameters(out: &mut String, parameters: &[Parameter], level: usize) {
    for parameter in parameters {
        write!(
            out,
            "{}{} ({}",
            INDENT.repeat(level),
            parameter.name,
            parameter.parameter_type
        )
        .unwrap();
        if parameter.required {
            out.push_str(", required");
        }
        out.push(')');
        if let Some(description) = &parameter.description {
            write!(out, ": {description}").unwrap();
        }
        out.push('\n');

        if let Some(fields) = nested_fields(&parameter.parameter_type) {
            write_parameters(out, fields, level + 1);
        }
    }
}

/// Fields shown beneath a parameter: its own for objects, or those of the
/// innermost object element for (nested) lists.
fn nested_fields(parameter_type: &ParameterType) -> Option<&[Parameter]> {
    match parameter_type.data_type() {
        DataType::Object => parameter_type.fields(),
        DataType::List => parameter_type.list_item_type().and_then(nested_fields),
        _ => None,
    }
}
