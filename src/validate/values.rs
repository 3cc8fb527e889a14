use crate::ast::{PrintNode, Value};
use crate::schema::{Schema, SchemaType, TypeRef};

/// Determines whether a value literal AST is valid for a given input type.
///
/// Returns whether the literal is valid together with the list of messages describing every
/// mismatch found, so callers can report all problems of a nested literal at once. Variables
/// are always considered valid here; their types are checked where the variable is defined
/// and where it is used, not where it appears as a literal.
pub fn is_valid_literal_value<'a>(
    schema: &'a Schema<'a>,
    of_type: &'a TypeRef<'a>,
    value: Option<&'a Value<'a>>,
) -> (bool, Vec<String>) {
    // A value must be provided if the type is non-null
    if let TypeRef::NonNullType(inner_type) = of_type {
        if value.map_or(true, Value::is_null) {
            let message = match inner_type {
                TypeRef::Type(name) => format!(r#"Expected "{}!", found null."#, name),
                _ => "Expected non-null value, found null.".to_string(),
            };
            return (false, vec![message]);
        }
        return is_valid_literal_value(schema, inner_type, value);
    }

    let value = match value {
        None => return (true, Vec::new()),
        Some(value) if value.is_null() => return (true, Vec::new()),
        Some(value) => value,
    };

    // Variables are assumed to provide values of the correct type
    if let Value::Variable(_) = value {
        return (true, Vec::new());
    }

    // Lists accept a non-list value as a list of one
    if let TypeRef::ListType(item_type) = of_type {
        if let Value::List(list_value) = value {
            let mut messages = Vec::new();
            for (index, item) in list_value.children.iter().enumerate() {
                let (_, item_messages) = is_valid_literal_value(schema, item_type, Some(item));
                for message in item_messages {
                    messages.push(format!("In element #{}: {}", index + 1, message));
                }
            }
            return (messages.is_empty(), messages);
        }
        return is_valid_literal_value(schema, item_type, Some(value));
    }

    let named = match of_type.named_type(schema) {
        Some(named) => named,
        // Unknown type names are KnownTypeNames' to report
        None => return (true, Vec::new()),
    };

    match named {
        SchemaType::InputObject(input_object) => {
            let object_value = match value {
                Value::Object(object_value) => object_value,
                _ => {
                    return (
                        false,
                        vec![format!(
                            r#"Expected "{}", found not an object."#,
                            input_object.name
                        )],
                    )
                }
            };
            let mut messages = Vec::new();

            // Ensure every provided field is defined
            for field in object_value.children.iter() {
                if input_object.get_field(field.name).is_none() {
                    messages.push(format!(r#"In field "{}": Unknown field."#, field.name));
                }
            }

            // Ensure every defined field is valid, in name order so output is stable
            let mut field_names: Vec<&str> = input_object.fields.keys().copied().collect();
            field_names.sort_unstable();
            for field_name in field_names {
                let field = &input_object.fields[field_name];
                let provided = object_value
                    .children
                    .iter()
                    .find(|object_field| object_field.name == field_name)
                    .map(|object_field| &object_field.value);
                let (_, field_messages) =
                    is_valid_literal_value(schema, field.input_type, provided);
                for message in field_messages {
                    messages.push(format!(r#"In field "{}": {}"#, field_name, message));
                }
            }

            (messages.is_empty(), messages)
        }
        SchemaType::Scalar(scalar) => {
            if scalar.is_valid_literal(value) {
                (true, Vec::new())
            } else {
                (
                    false,
                    vec![format!(
                        r#"Expected type "{}", found {}."#,
                        scalar.name,
                        value.print()
                    )],
                )
            }
        }
        SchemaType::Enum(enum_type) => {
            if enum_type.is_valid_literal(value) {
                (true, Vec::new())
            } else {
                (
                    false,
                    vec![format!(
                        r#"Expected type "{}", found {}."#,
                        enum_type.name,
                        value.print()
                    )],
                )
            }
        }
        // Output types in input positions are reported by other rules
        _ => (true, Vec::new()),
    }
}
