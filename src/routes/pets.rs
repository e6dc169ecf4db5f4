use axum::{Json, extract::Path, http::StatusCode};

use crate::services::pet_catalog::{self, PetFact, PetProfile, PetType};

pub async fn list_pets_handler() -> Json<&'static [PetProfile]> {
    Json(pet_catalog::all())
}

pub async fn get_pet_handler(
    Path(pet_type): Path<String>,
) -> Result<Json<&'static PetProfile>, StatusCode> {
    PetType::from_id(&pet_type)
        .and_then(pet_catalog::get)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn pet_facts_handler() -> Json<&'static [PetFact]> {
    Json(pet_catalog::facts())
}
