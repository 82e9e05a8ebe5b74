pub mod core;

#[macro_export]
macro_rules! serializable_struct {
    ( $name:ident { $( $(#[$attr:meta])* $param:ident : $type:ty ),* $(,)? } ) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
        pub struct $name {
            $(
                $(#[$attr])*
                pub $param : $type,
            )*
        }
    };
}
