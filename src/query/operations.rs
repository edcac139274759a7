/*!
 * This is the query operations module.
 * Adding new operations should be done here.
 *
 * New operations need:
 * - A struct implementing `GeoOperation` (and `Default`, used as its example)
 * - An enum variant containing that struct in `OperationChoice`
 *
 * The variant name, in snake_case, is the `op` name used in query documents.
 */

use enum_dispatch::enum_dispatch;
use itertools::Itertools;
use serde::{Serialize, Deserialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::geo_3d::{GeoResult, Point, Line};
use crate::query;

// Source files for the operations
mod point_queries;
mod intersections;
mod plane_relations;
mod vector_queries;

/// Query operations enum.
/// To add a new operation:
/// implement the `GeoOperation` trait for it
/// and include it here.
#[derive(Debug, Clone, Serialize, Deserialize, EnumIter, IntoStaticStr)]
#[serde(tag = "op", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[enum_dispatch(GeoOperation)]
pub enum OperationChoice {
    /// Signed distance from a point to a plane.
    DistanceToPoint(point_queries::DistanceToPoint),
    /// Whether a point lies on a plane.
    ContainsPoint(point_queries::ContainsPoint),
    /// Orthogonal projection of a point onto a plane.
    ProjectPoint(point_queries::ProjectPoint),
    /// Mirror image of a point across a plane.
    ReflectPoint(point_queries::ReflectPoint),
    /// Intersection of a line segment with a plane.
    IntersectLine(intersections::IntersectLine),
    /// Intersection line of two planes.
    IntersectPlane(intersections::IntersectPlane),
    /// Whether two planes are parallel.
    IsParallel(plane_relations::IsParallel),
    /// Whether two planes are the same geometric plane.
    PlanesEqual(plane_relations::PlanesEqual),
    /// Whether two planes coincide (parallel and sharing a point).
    IsCoincident(plane_relations::IsCoincident),
    /// Normalized coefficients of a plane's equation.
    PlaneCoefficients(plane_relations::PlaneCoefficients),
    /// Angle between two vectors, in radians.
    AngleBetween(vector_queries::AngleBetween),
}

/// Query operation trait.
/// This trait must be implemented for all operations.
#[enum_dispatch] // Lets the enum forward calls to its variants without trait objects
pub trait GeoOperation {
    /// One-line description, shown in the operation listing.
    fn description(&self) -> &'static str;

    /// Run the operation.
    /// Invalid or degenerate input is an `Err`; a missed intersection is an ordinary `Outcome`.
    fn evaluate(&self) -> GeoResult<Outcome>;
}

/// The result of a successful operation.
/// Written as `{kind, value}` so every document format reads it the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Distance(f64),
    Flag(bool),
    Point(Point),
    Line(Line),
    NoIntersection,
    Angle(f64),
    Coefficients([f64; 4]),
}

//
// ------------------------------------------------------------
// Functions with no modification needed
//      |
//      V
//

impl OperationChoice {
    /// Name of the operation, as written in query documents.
    pub fn get_op_name(&self) -> &'static str {
        self.into()
    }

    /// Construct the example instance of an operation from its name.
    pub fn from_name(name: &str) -> query::ProcResult<Self> {
        match OperationChoice::iter().find(|op| op.get_op_name() == name) {
            Some(op) => Ok(op),
            None => Err(query::QueryError::UnknownOperation(format!(
                "{}\n{}",
                name,
                available_operations(),
            ))),
        }
    }
}

/// Listing of all operations with their descriptions.
pub fn available_operations() -> String {
    let listing = OperationChoice::iter()
        .map(|op| format!("    {:<20} {}", op.get_op_name(), op.description()))
        .join("\n");
    format!("Available operations:\n{}", listing)
}
