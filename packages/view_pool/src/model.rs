/// A data record that can be represented by a pooled view.
///
/// Models are created and owned by the caller; the pool never creates or
/// destroys them. A model moves into a view when the view is bound via
/// [`ViewPool::provide()`][crate::ViewPool::provide] and is dropped when the
/// view is cleaned.
///
/// # Identity
///
/// The [`id()`][Self::id] must be unique among all models currently bound to
/// in-use views of the same pool. It is the handle used by
/// [`free()`][crate::ViewPool::free] and [`find()`][crate::ViewPool::find]
/// to locate the bound view later.
///
/// # Example
///
/// ```rust
/// use view_pool::Model;
///
/// struct Cat {
///     id: String,
///     name: String,
/// }
///
/// impl Model for Cat {
///     fn id(&self) -> &str {
///         &self.id
///     }
/// }
/// ```
pub trait Model {
    /// The unique identifier of this record.
    ///
    /// Must remain stable for as long as the record is bound to a view.
    fn id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_returned_verbatim() {
        struct Plain {
            id: String,
        }

        impl Model for Plain {
            fn id(&self) -> &str {
                &self.id
            }
        }

        let model = Plain {
            id: "cat-01".to_string(),
        };

        assert_eq!(model.id(), "cat-01");
    }
}
