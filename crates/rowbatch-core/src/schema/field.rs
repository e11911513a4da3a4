use crate::stmt::{Type, Value};

#[derive(Debug, Clone)]
pub struct Field {
    /// Struct field name. Exclusion lists refer to fields by this name.
    pub name: &'static str,

    /// Database column name
    pub column: String,

    /// What the field holds
    pub ty: FieldTy,

    /// True when the field accepts null (`Option<T>`)
    pub nullable: bool,

    /// True when the field is part of the primary key
    pub primary_key: bool,

    /// True when the database assigns the value on insert
    pub auto_increment: bool,

    /// Value used when the field is blank, from `#[column(default = ..)]`
    pub default: Option<fn() -> Value>,

    /// Foreign key the field is tagged with, from a relation attribute or
    /// `#[foreign_key(..)]`
    pub foreign_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTy {
    /// A column value
    Primitive(Type),

    /// An association with another record type
    Relation(RelationKind),

    /// A field that is not mapped to a column (`#[skip]`, or tagged with a
    /// foreign key without being a relation)
    Unmapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsTo,
    HasMany,
    HasOne,
}

impl Field {
    pub fn primitive(name: &'static str, ty: Type) -> Self {
        Self {
            name,
            column: name.to_string(),
            ty: FieldTy::Primitive(ty),
            nullable: false,
            primary_key: false,
            auto_increment: false,
            default: None,
            foreign_key: None,
        }
    }

    pub fn relation(name: &'static str, kind: RelationKind) -> Self {
        Self {
            ty: FieldTy::Relation(kind),
            ..Self::unmapped(name)
        }
    }

    pub fn unmapped(name: &'static str) -> Self {
        Self {
            name,
            column: name.to_string(),
            ty: FieldTy::Unmapped,
            nullable: false,
            primary_key: false,
            auto_increment: false,
            default: None,
            foreign_key: None,
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.ty, FieldTy::Relation(_))
    }

    /// Returns the column type of a primitive field.
    pub fn primitive_ty(&self) -> Option<Type> {
        match self.ty {
            FieldTy::Primitive(ty) => Some(ty),
            _ => None,
        }
    }

    /// True for the `created_at` bookkeeping field.
    pub fn is_created_at(&self) -> bool {
        self.name == "created_at"
    }

    /// True for the `created_at` and `updated_at` bookkeeping fields, which
    /// are stamped with the current time when left blank.
    pub fn is_timestamp(&self) -> bool {
        self.is_created_at() || self.name == "updated_at"
    }
}
