///
/// entity_model
///
/// Implement `Path` and `Modeled` for an oracle type from a declarative
/// field list. Indexer properties are the keys accepted by the type's
/// `PropertyBag`.
///

#[macro_export]
macro_rules! entity_model {
    (
        $ty:ty,
        path = $path:literal,
        name = $name:literal,
        $( base = $base:literal, )?
        fields = [ $( $field:expr ),* $(,)? ],
        indexer = [ $( $prop:expr ),* $(,)? ] $(,)?
    ) => {
        impl $crate::traits::Path for $ty {
            const PATH: &'static str = $path;
        }

        impl $crate::traits::Modeled for $ty {
            const MODEL: &'static $crate::model::EntityModel = &$crate::model::EntityModel {
                path: $path,
                entity_name: $name,
                base: $crate::entity_model!(@base $( $base )?),
                fields: &[ $( $field ),* ],
                indexer: &[ $( $prop ),* ],
            };
        }
    };

    (@base) => {
        None
    };

    (@base $base:literal) => {
        Some($base)
    };
}
