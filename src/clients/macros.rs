/// Generates a client method that sends `$request::$variant` with the given
/// parameters and waits for the reply.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, crate::error::SessionError> {
                tracing::debug!("Sending request");
                self.request(|respond_to| $request::$variant {
                    $($param,)*
                    respond_to,
                })
                .await
            }
        }
    };
}
