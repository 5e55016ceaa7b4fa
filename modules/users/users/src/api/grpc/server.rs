//! gRPC Server implementation for users
//!
//! The server implementation decodes requests, delegates to the domain
//! `Service`, and encodes results. Domain errors become `Status` values via
//! the uniform mapping in [`super::error`].

use std::sync::Arc;

use tonic::{Request, Response, Status};

use users_sdk::UserRequest;
use users_sdk::proto::{
    CreateUserRequest, CreateUserResponse, DeleteUserRequest, DeleteUserResponse, GetUserRequest,
    GetUserResponse, ListUsersRequest, ListUsersResponse, UpdateUserRequest, UpdateUserResponse,
};

use crate::domain::service::Service;

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct UsersServiceImpl {
    service: Arc<Service>,
}

impl UsersServiceImpl {
    /// Create a new `UsersServiceImpl` with the given Service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl users_sdk::UserService for UsersServiceImpl {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .create_user(UserRequest {
                email: req.email,
                password: req.password,
            })
            .await?;

        Ok(Response::new(CreateUserResponse {
            user: Some(user.into()),
        }))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let id = request.into_inner().id;

        let user = self.service.get_user_by_id(&id).await?;

        Ok(Response::new(GetUserResponse {
            user: Some(user.into()),
        }))
    }

    async fn list_users(
        &self,
        _request: Request<ListUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let users = self.service.get_all_users().await?;

        Ok(Response::new(ListUsersResponse {
            users: users.into_iter().map(Into::into).collect(),
        }))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .update_user(
                &req.id,
                UserRequest {
                    email: req.email,
                    password: req.password,
                },
            )
            .await?;

        Ok(Response::new(UpdateUserResponse {
            user: Some(user.into()),
        }))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let id = request.into_inner().id;

        self.service.delete_user(&id).await?;

        Ok(Response::new(DeleteUserResponse { success: true }))
    }
}
