use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use ks_dao::{dto::pagination::Pagination, record::RecordDao};
use ks_pagination::{PageEdges, Paginator, PaginatorReq};
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        record::{
            DeleteOneRecordReqPath, DeleteRecordResJson, FindOneRecordReqPath,
            InsertOneRecordReqJson, RecordResJson,
        },
        Response,
    },
};

pub fn record_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/record", web::post().to(insert_one))
        .route("/record/{record_id}", web::get().to(find_one))
        .route("/record/{record_id}", web::delete().to(delete_one))
        .route("/records", web::get().to(find_many));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<InsertOneRecordReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let record_data = RecordDao::new(ctx.dao().db(), data.name());
    if let Err(err) = record_data.db_insert(ctx.dao().db()).await {
        return Response::error(&err);
    }

    Response::data(
        &StatusCode::CREATED,
        None,
        &RecordResJson::from_dao(&record_data),
    )
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindOneRecordReqPath>,
) -> HttpResponse {
    match RecordDao::db_select(ctx.dao().db(), path.record_id()).await {
        Ok(record_data) => Response::data(
            &StatusCode::OK,
            None,
            &RecordResJson::from_dao(&record_data),
        ),
        Err(err) => Response::error(&err),
    }
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<DeleteOneRecordReqPath>,
) -> HttpResponse {
    if let Err(err) = RecordDao::db_delete(ctx.dao().db(), path.record_id()).await {
        return Response::error(&err);
    }

    Response::data(
        &StatusCode::OK,
        None,
        &DeleteRecordResJson::new(path.record_id()),
    )
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    req: HttpRequest,
    query: web::Query<PaginatorReq>,
) -> HttpResponse {
    let config = ctx.pagination();

    if let Err(err) = query.validate(config.min_limit(), config.max_limit()) {
        return Response::error(&err);
    }

    let anchor = match query.direction() {
        Ok(anchor) => anchor,
        Err(err) => return Response::error(&err),
    };
    let limit = query.limit_or(config.default_limit());

    let (records_data, lookahead) =
        match RecordDao::db_select_many(ctx.dao().db(), &Pagination::new(&anchor, &limit)).await {
            Ok(data) => data,
            Err(err) => return Response::error(&err),
        };

    let paginator = match Paginator::new(
        &records_data.len(),
        &limit,
        &PageEdges::from_rows(&records_data, RecordDao::page_edge),
        &anchor.map(|cursor| *cursor.direction()),
        &lookahead,
    )
    .with_pages(&page_base_url(&req))
    {
        Ok(paginator) => paginator,
        Err(err) => return Response::error(&err),
    };

    let records = records_data
        .iter()
        .map(RecordResJson::from_dao)
        .collect::<Vec<_>>();

    Response::data(&StatusCode::OK, Some(paginator), &records)
}

fn page_base_url(req: &HttpRequest) -> String {
    let conn = req.connection_info();
    format!("{}://{}{}", conn.scheme(), conn.host(), req.path())
}
