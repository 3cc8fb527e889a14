//! The validation rules defined by the GraphQL specification, one module per rule.
//!
//! Every rule is a [`ValidationRule`](super::ValidationRule): a visitor over the
//! [`ValidationContext`](super::ValidationContext) holding its own per-document state.
//! [`validate`](super::validate) runs them all; each can also run alone.

mod arguments_of_correct_type;
mod default_values_of_correct_type;
mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod overlapping_fields_can_be_merged;
mod possible_fragment_spreads;
mod provided_non_null_arguments;
mod scalar_leafs;
mod unique_argument_names;
mod unique_fragment_names;
mod unique_input_field_names;
mod unique_operation_names;
mod unique_variable_names;
mod variables_are_input_types;
mod variables_in_allowed_position;

pub use arguments_of_correct_type::*;
pub use default_values_of_correct_type::*;
pub use fields_on_correct_type::*;
pub use fragments_on_composite_types::*;
pub use known_argument_names::*;
pub use known_directives::*;
pub use known_fragment_names::*;
pub use known_type_names::*;
pub use lone_anonymous_operation::*;
pub use no_fragment_cycles::*;
pub use no_undefined_variables::*;
pub use no_unused_fragments::*;
pub use no_unused_variables::*;
pub use overlapping_fields_can_be_merged::*;
pub use possible_fragment_spreads::*;
pub use provided_non_null_arguments::*;
pub use scalar_leafs::*;
pub use unique_argument_names::*;
pub use unique_fragment_names::*;
pub use unique_input_field_names::*;
pub use unique_operation_names::*;
pub use unique_variable_names::*;
pub use variables_are_input_types::*;
pub use variables_in_allowed_position::*;
