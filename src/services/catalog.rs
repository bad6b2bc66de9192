//! Catalog service, presents filtering operations over a product batch
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::future;
use futures::Future;
use futures_cpupool::CpuPool;
use validator::Validate;

use filters::{filter_by_category, filter_local, FilterStrategy};
use models::{
    extract_categories, Category, CategoryId, FilterCriteria, NewProduct, Product, RemoteFilterRequest, Shop,
};
use remote::error::Error as RemoteError;
use remote::RemoteFilters;

use super::error::ServiceError;
use super::types::ServiceFuture;

/// How far down the fallback chain a result had to travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackLevel {
    /// The selected strategy succeeded
    None,
    /// Remote evaluation failed; the result is the local re-computation
    Local,
    /// Local recovery failed too; the result is category-filtered only
    CategoryOnly,
}

/// Outcome of one filtering pass. The product list is always the best
/// effort available: failures degrade filter precision (the list becomes a
/// superset of the intent) but never blank it.
#[derive(Debug, Clone)]
pub struct FilteredCatalog {
    pub products: Vec<Product>,
    pub total: i64,
    pub fallback: FallbackLevel,
    pub error: Option<String>,
}

pub trait CatalogService {
    /// Filters a product batch against the criteria set, choosing the
    /// local or remote evaluation path from the shape of the request
    fn filter_products(
        &self,
        shop: Shop,
        products: Vec<Product>,
        category_id: Option<CategoryId>,
        search_term: String,
        criteria: FilterCriteria,
        remote_requested: bool,
    ) -> ServiceFuture<FilteredCatalog>;

    /// Distinct categories of a product batch, sorted by display name
    fn categories(&self, products: Vec<Product>) -> ServiceFuture<Vec<Category>>;

    /// Validates and accepts a batch from the data-loading collaborator
    fn load_products(&self, payload: Vec<NewProduct>) -> ServiceFuture<Vec<Product>>;
}

/// Catalog service, responsible for strategy selection and the mandatory
/// fallback chain around the remote collaborator
pub struct CatalogServiceImpl {
    pub cpu_pool: CpuPool,
    pub remote_filters: Arc<RemoteFilters>,
}

impl CatalogServiceImpl {
    pub fn new(cpu_pool: CpuPool, remote_filters: Arc<RemoteFilters>) -> Self {
        Self {
            cpu_pool,
            remote_filters,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn filter_products(
        &self,
        shop: Shop,
        products: Vec<Product>,
        category_id: Option<CategoryId>,
        search_term: String,
        criteria: FilterCriteria,
        remote_requested: bool,
    ) -> ServiceFuture<FilteredCatalog> {
        match FilterStrategy::select(&search_term, &criteria, remote_requested) {
            FilterStrategy::CategoryOnly => Box::new(self.cpu_pool.spawn_fn(
                move || -> Result<FilteredCatalog, ServiceError> {
                    let filtered = filter_by_category(&products, category_id);
                    Ok(FilteredCatalog {
                        total: filtered.len() as i64,
                        products: filtered,
                        fallback: FallbackLevel::None,
                        error: None,
                    })
                },
            )),
            FilterStrategy::Local => {
                let vertical = shop.vertical;
                Box::new(self.cpu_pool.spawn_fn(
                    move || -> Result<FilteredCatalog, ServiceError> {
                        let filtered = filter_local(&products, vertical, category_id, &search_term, &criteria);
                        Ok(FilteredCatalog {
                            total: filtered.len() as i64,
                            products: filtered,
                            fallback: FallbackLevel::None,
                            error: None,
                        })
                    },
                ))
            }
            FilterStrategy::Remote => {
                let category_name = category_id.and_then(|id| shop.category_name(id)).map(String::from);
                let request = RemoteFilterRequest {
                    shop_id: shop.id,
                    criteria: criteria.clone(),
                    search_term: search_term.clone(),
                    category_name,
                };
                let vertical = shop.vertical;
                let cpu_pool = self.cpu_pool.clone();
                Box::new(self.remote_filters.filter_products(request).then(move |result| {
                    match result {
                        Ok(response) => Box::new(future::ok(FilteredCatalog {
                            total: response.total,
                            products: response.products,
                            fallback: FallbackLevel::None,
                            error: None,
                        })) as ServiceFuture<FilteredCatalog>,
                        Err(err) => {
                            warn!("Remote filtering failed, falling back to local evaluation: {}", err);
                            Box::new(cpu_pool.spawn_fn(move || -> Result<FilteredCatalog, ServiceError> {
                                Ok(recover_locally(
                                    || filter_local(&products, vertical, category_id, &search_term, &criteria),
                                    &products,
                                    category_id,
                                    err,
                                ))
                            })) as ServiceFuture<FilteredCatalog>
                        }
                    }
                }))
            }
        }
    }

    fn categories(&self, products: Vec<Product>) -> ServiceFuture<Vec<Category>> {
        Box::new(self.cpu_pool.spawn_fn(move || -> Result<Vec<Category>, ServiceError> {
            Ok(extract_categories(&products))
        }))
    }

    fn load_products(&self, payload: Vec<NewProduct>) -> ServiceFuture<Vec<Product>> {
        Box::new(self.cpu_pool.spawn_fn(move || -> Result<Vec<Product>, ServiceError> {
            let mut products = Vec::with_capacity(payload.len());
            for new_product in payload {
                new_product.validate().map_err(ServiceError::Validate)?;
                products.push(Product::from(new_product));
            }
            Ok(products)
        }))
    }
}

/// Second and third tier of the fallback chain: re-run the local pass, and
/// if even that blows up on a corrupt batch, return the narrowest safe
/// result instead of propagating. The remote error is carried on the
/// outcome as a non-fatal flag either way.
fn recover_locally<F>(local: F, products: &[Product], category_id: Option<CategoryId>, err: RemoteError) -> FilteredCatalog
where
    F: FnOnce() -> Vec<Product>,
{
    match panic::catch_unwind(AssertUnwindSafe(local)) {
        Ok(filtered) => FilteredCatalog {
            total: filtered.len() as i64,
            products: filtered,
            fallback: FallbackLevel::Local,
            error: Some(format!("{}", err)),
        },
        Err(_) => {
            error!("Local fallback filtering failed as well, returning category-filtered products only");
            let narrowed = filter_by_category(products, category_id);
            FilteredCatalog {
                total: narrowed.len() as i64,
                products: narrowed,
                fallback: FallbackLevel::CategoryOnly,
                error: Some(format!("{}", err)),
            }
        }
    }
}
