use store::{NewWishlistItem, WishlistItem};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_wishlist(&self, user_id: &str) -> Result<Vec<WishlistItem>, ApiError> {
        self.get(&format!("/api/wishlist/{user_id}")).await
    }

    pub async fn add_wishlist(&self, item: &NewWishlistItem) -> Result<WishlistItem, ApiError> {
        self.post("/api/wishlist", item).await
    }

    pub async fn remove_wishlist(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/wishlist/{id}")).await
    }
}
