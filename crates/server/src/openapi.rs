use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a customer record. Field names are capitalized on the wire.
#[derive(serde::Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerDoc {
    #[serde(rename = "ID")]
    pub id: u8,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list_customers,
        crate::routes::customers::get_customer,
        crate::routes::customers::create_customer,
        crate::routes::customers::update_customer,
        crate::routes::customers::batch_update_customers,
        crate::routes::customers::delete_customer,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
