//! A small record used by the unit tests of this crate.

use crate::{Field, FieldDef, Record, Schema};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointField {
    X,
    Y,
    Label,
}

impl Point {
    pub const X: Field<Point, i64> = Field::new(PointField::X);
    pub const Y: Field<Point, i64> = Field::new(PointField::Y);
    pub const LABEL: Field<Point, Option<String>> = Field::new(PointField::Label);
}

static POINT_SCHEMA: Lazy<Schema<Point>> = Lazy::new(|| {
    Schema::builder("Point")
        .field(FieldDef::new(Point::X, "x", |p| p.x, |p, v| p.x = v).required())
        .field(FieldDef::new(Point::Y, "y", |p| p.y, |p, v| p.y = v).required())
        .field(FieldDef::new(
            Point::LABEL,
            "label",
            |p| p.label.clone(),
            |p, v| p.label = v,
        ))
        .build()
        .expect("Point schema is valid")
});

impl Record for Point {
    type Key = PointField;

    fn blank() -> Self {
        Point {
            x: 0,
            y: 0,
            label: None,
        }
    }

    fn schema() -> &'static Schema<Self> {
        &POINT_SCHEMA
    }
}
