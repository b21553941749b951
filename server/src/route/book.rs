use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    AddBookRequest, BookTransformer, DeleteBookRequest, GetBookRequest, UpdateBookRequest,
};
use crate::response::{
    AddBookMutationResponse, AddBookPresenter, BookPresenter, BookResponse,
    DeleteBookMutationResponse, DeleteBookPresenter, UpdateBookMutationResponse,
    UpdateBookPresenter,
};
use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};
use async_graphql::{Context, ErrorExtensions, Object, ID};

pub struct BookQueryRoot;

#[Object(name = "Query")]
impl BookQueryRoot {
    /// Every book in the catalog, oldest first.
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<BookResponse>> {
        let module = ctx.data::<AppModule>()?;
        Controller::new((), BookPresenter)
            .bypass(|| module.database().get_all_books())
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }

    /// `null` when no book has this id.
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<BookResponse>> {
        let module = ctx.data::<AppModule>()?;
        Controller::new(BookTransformer, BookPresenter)
            .intake(GetBookRequest::new(id))
            .handle(|dto| module.database().get_book(dto))
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }
}

pub struct BookMutationRoot;

#[Object(name = "Mutation")]
impl BookMutationRoot {
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: Option<String>,
        author: Option<String>,
        is_published: Option<bool>,
    ) -> async_graphql::Result<AddBookMutationResponse> {
        let module = ctx.data::<AppModule>()?;
        Controller::new(BookTransformer, AddBookPresenter)
            .intake(AddBookRequest::new(title, author, is_published))
            .try_present(|dto| module.database().create_book(dto))
            .await
            .map_err(|status| status.extend())
    }

    /// Replaces title, author and publication state. Reviews are kept.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        author: Option<String>,
        is_published: Option<bool>,
    ) -> async_graphql::Result<UpdateBookMutationResponse> {
        let module = ctx.data::<AppModule>()?;
        Controller::new(BookTransformer, UpdateBookPresenter)
            .intake(UpdateBookRequest::new(id, title, author, is_published))
            .try_present(|dto| module.database().update_book(dto))
            .await
            .map_err(|status| status.extend())
    }

    async fn delete_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<DeleteBookMutationResponse> {
        let module = ctx.data::<AppModule>()?;
        Controller::new(BookTransformer, DeleteBookPresenter)
            .intake(DeleteBookRequest::new(id))
            .try_present(|dto| module.database().delete_book(dto))
            .await
            .map_err(|status| status.extend())
    }
}

#[cfg(test)]
mod test {
    use crate::handler::AppModule;
    use crate::route::{build_schema, CatalogSchema};
    use async_graphql::{Request, Variables};
    use driver::database::InMemoryDatabase;
    use kernel::KernelError;
    use serde_json::{json, Value};

    const GET_BOOKS: &str = "query GetBooks { books { id title author isPublished } }";

    const GET_BOOK: &str = r#"
        query GetBook($id: ID!) {
            book(id: $id) { id title author isPublished reviews { id body } }
        }
    "#;

    const ADD_BOOK: &str = r#"
        mutation AddBook($title: String, $author: String, $isPublished: Boolean) {
            addBook(title: $title, author: $author, isPublished: $isPublished) {
                code success message data { book { id title author isPublished reviews { id } } }
            }
        }
    "#;

    const UPDATE_BOOK: &str = r#"
        mutation UpdateBook($id: ID!, $title: String, $author: String, $isPublished: Boolean) {
            updateBook(id: $id, title: $title, author: $author, isPublished: $isPublished) {
                code success message data { book { id title author isPublished reviews { id body } } }
            }
        }
    "#;

    const DELETE_BOOK: &str = r#"
        mutation DeleteBook($id: ID!) {
            deleteBook(id: $id) { code success message data { books { id } } }
        }
    "#;

    fn seeded_schema() -> error_stack::Result<CatalogSchema, KernelError> {
        let database = InMemoryDatabase::seeded()?;
        Ok(build_schema(AppModule::with_database(database)))
    }

    async fn execute(schema: &CatalogSchema, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = schema.execute(request).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().expect("graphql data is plain json")
    }

    async fn count_books(schema: &CatalogSchema) -> usize {
        let data = execute(schema, GET_BOOKS, json!({})).await;
        data["books"].as_array().map(Vec::len).unwrap_or_default()
    }

    #[tokio::test]
    async fn seed_book_is_served_verbatim() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let data = execute(&schema, GET_BOOK, json!({ "id": "1" })).await;
        assert_eq!(
            data,
            json!({
                "book": {
                    "id": "1",
                    "title": "The Awakening",
                    "author": "Kate Chopin",
                    "isPublished": true,
                    "reviews": [{ "id": "rv-001", "body": "this is a good book" }]
                }
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_book_is_null() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let data = execute(&schema, GET_BOOK, json!({ "id": "404" })).await;
        assert_eq!(data, json!({ "book": null }));
        Ok(())
    }

    #[tokio::test]
    async fn books_are_listed_in_insertion_order() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let data = execute(&schema, GET_BOOKS, json!({})).await;
        assert_eq!(
            data,
            json!({
                "books": [
                    { "id": "1", "title": "The Awakening", "author": "Kate Chopin", "isPublished": true },
                    { "id": "2", "title": "City of Glass", "author": "Paul Auster", "isPublished": true }
                ]
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn add_book_answers_with_created_envelope() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let variables = json!({ "title": "A", "author": "B", "isPublished": true });
        let data = execute(&schema, ADD_BOOK, variables).await;

        let response = &data["addBook"];
        assert_eq!(response["code"], "201");
        assert_eq!(response["success"], true);
        assert_eq!(response["message"], "book created successfully");
        let book = &response["data"]["book"];
        assert_eq!(book["title"], "A");
        assert_eq!(book["author"], "B");
        assert_eq!(book["isPublished"], true);
        assert_eq!(book["reviews"], json!([]));

        let id = book["id"].as_str().expect("created book has an id");
        let fetched = execute(&schema, GET_BOOK, json!({ "id": id })).await;
        assert_eq!(fetched["book"]["title"], "A");
        assert_eq!(count_books(&schema).await, 3);
        Ok(())
    }

    #[tokio::test]
    async fn add_book_without_title_is_rejected() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let data = execute(&schema, ADD_BOOK, json!({ "author": "nobody" })).await;
        assert_eq!(
            data["addBook"],
            json!({
                "code": "400",
                "success": false,
                "message": "title is required",
                "data": { "book": null }
            })
        );
        assert_eq!(count_books(&schema).await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_book_overwrites_fields() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let variables = json!({ "id": "1", "title": "X", "author": "Y", "isPublished": false });
        let data = execute(&schema, UPDATE_BOOK, variables).await;
        let expected_book = json!({
            "id": "1",
            "title": "X",
            "author": "Y",
            "isPublished": false,
            "reviews": [{ "id": "rv-001", "body": "this is a good book" }]
        });
        assert_eq!(
            data["updateBook"],
            json!({
                "code": "201",
                "success": true,
                "message": "book updated successfully",
                "data": { "book": expected_book.clone() }
            })
        );

        let fetched = execute(&schema, GET_BOOK, json!({ "id": "1" })).await;
        assert_eq!(fetched["book"], expected_book);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_book_is_not_found() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let variables = json!({ "id": "missing", "title": "X" });
        let data = execute(&schema, UPDATE_BOOK, variables).await;
        assert_eq!(
            data["updateBook"],
            json!({
                "code": "404",
                "success": false,
                "message": "book not found",
                "data": { "book": null }
            })
        );
        assert_eq!(count_books(&schema).await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_book_without_title_is_rejected() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let before = execute(&schema, GET_BOOKS, json!({})).await;
        for title in [Value::Null, json!("   ")] {
            let variables = json!({ "id": "1", "title": title, "author": "Y" });
            let data = execute(&schema, UPDATE_BOOK, variables).await;
            assert_eq!(
                data["updateBook"],
                json!({
                    "code": "400",
                    "success": false,
                    "message": "title is required",
                    "data": { "book": null }
                })
            );
        }
        assert_eq!(execute(&schema, GET_BOOKS, json!({})).await, before);
        Ok(())
    }

    #[tokio::test]
    async fn update_book_with_only_a_title_resets_other_fields(
    ) -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let data = execute(&schema, UPDATE_BOOK, json!({ "id": "1", "title": "Renamed" })).await;
        let expected_book = json!({
            "id": "1",
            "title": "Renamed",
            "author": "",
            "isPublished": false,
            "reviews": [{ "id": "rv-001", "body": "this is a good book" }]
        });
        assert_eq!(data["updateBook"]["code"], "201");
        assert_eq!(data["updateBook"]["data"]["book"], expected_book);

        let fetched = execute(&schema, GET_BOOK, json!({ "id": "1" })).await;
        assert_eq!(fetched["book"], expected_book);
        Ok(())
    }

    #[tokio::test]
    async fn delete_book_returns_remaining_books()-> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let data = execute(&schema, DELETE_BOOK, json!({ "id": "1" })).await;
        assert_eq!(
            data["deleteBook"],
            json!({
                "code": "200",
                "success": true,
                "message": "Book deleted",
                "data": { "books": [{ "id": "2" }] }
            })
        );

        let fetched = execute(&schema, GET_BOOK, json!({ "id": "1" })).await;
        assert_eq!(fetched, json!({ "book": null }));
        Ok(())
    }

    #[tokio::test]
    async fn delete_of_unknown_book_changes_nothing() -> error_stack::Result<(), KernelError> {
        let schema = seeded_schema()?;
        let before = execute(&schema, GET_BOOKS, json!({})).await;
        let data = execute(&schema, DELETE_BOOK, json!({ "id": "missing" })).await;
        assert_eq!(
            data["deleteBook"],
            json!({
                "code": "404",
                "success": false,
                "message": "book not found",
                "data": { "books": [] }
            })
        );
        assert_eq!(execute(&schema, GET_BOOKS, json!({})).await, before);
        Ok(())
    }
}
