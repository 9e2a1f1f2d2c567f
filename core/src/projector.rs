//! # Property Projection
//!
//! Renders a type's readable properties as normalized `(name, type)` display
//! pairs. Parameterized types render as `Base<Arg1, Arg2>` with any arity
//! suffix stripped, and a closed alias table maps the primitive names to
//! their short display forms.

use slicemap_common::descriptor::{TypeDescriptor, TypeRef};
use slicemap_common::model::Property;

/// Primitive alias table. Anything not listed keeps its own simple name.
const TYPE_ALIASES: &[(&str, &str)] = &[
    ("String", "string"),
    ("Int32", "int"),
    ("Int64", "long"),
    ("Boolean", "bool"),
    ("Decimal", "decimal"),
    ("Double", "double"),
    ("Single", "float"),
    ("Guid", "Guid"),
    ("DateTime", "DateTime"),
];

/// Renders a type reference as its display name, recursing into type
/// arguments.
pub fn display_name(ty: &TypeRef) -> String {
    if !ty.is_parameterized() {
        return alias_for(ty.base_name());
    }

    let args: Vec<String> = ty.args.iter().map(display_name).collect();
    format!("{}<{}>", ty.base_name(), args.join(", "))
}

fn alias_for(name: &str) -> String {
    TYPE_ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Projects a descriptor's readable properties. An absent property list
/// yields an empty vector; there are no failure modes.
pub fn project_properties(descriptor: &TypeDescriptor) -> Vec<Property> {
    descriptor
        .properties
        .iter()
        .map(|property| Property::new(&property.name, display_name(&property.ty)))
        .collect()
}
