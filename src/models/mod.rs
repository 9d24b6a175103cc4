//! Data models for the Ramblers back office

pub mod contact;
pub mod equipment;
pub mod page;
pub mod portfolio;
pub mod rental;
pub mod testimonial;
pub mod user;

// Re-export commonly used types
pub use contact::{ContactRequest, ContactStatus};
pub use equipment::Equipment;
pub use page::Page;
pub use portfolio::{PortfolioItem, VideoType};
pub use rental::{RentalRequest, RentalStatus};
pub use testimonial::Testimonial;
pub use user::{User, UserRole};

/// Store a string-backed enum in a TEXT column.
///
/// The type must provide `as_str()` and a `FromStr` impl with `Err = String`.
macro_rules! text_enum {
    ($ty:ty) => {
        impl sqlx::Type<sqlx::Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $ty {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let s: String = sqlx::Decode::<sqlx::Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl sqlx::Encode<'_, sqlx::Postgres> for $ty {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as sqlx::Encode<sqlx::Postgres>>::encode(self.as_str(), buf)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

pub(crate) use text_enum;
