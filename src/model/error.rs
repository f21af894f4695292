use thiserror::Error;

/// Why an attempted edge commit was rejected.
///
/// The `Display` strings are shown to the user verbatim as a blocking notice;
/// every rejection leaves the form state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EdgeError {
	/// Source and/or target select is still on its placeholder entry.
	#[error("Please select both source and target nodes.")]
	MissingEndpoint,
	/// Source and target name the same node.
	#[error("Source and target cannot be the same.")]
	SelfLoop,
	/// The weight field is empty.
	#[error("Please enter a weight for the edge.")]
	MissingWeight,
	/// The weight field does not parse as a finite number.
	#[error("Weight must be a numeric value.")]
	NonNumericWeight,
	/// An edge with the same source and target is already committed.
	#[error("This edge already exists.")]
	DuplicateEdge,
}
