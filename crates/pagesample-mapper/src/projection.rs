//! Projection of source sequences into pages of mapped objects.

use crate::MapperConfiguration;
use pagesample_core::{PageRequest, PageSampleResult, PageSource, PaginatedList};
use tracing::debug;

/// Lazily applies `transform` to every element of `source`, in order.
pub fn project<S, D, I, F>(source: I, transform: F) -> impl Iterator<Item = D>
where
    I: IntoIterator<Item = S>,
    F: FnMut(S) -> D,
{
    source.into_iter().map(transform)
}

/// Lazily maps every element of `source` with the registered `S -> D` map.
///
/// The map is looked up once, before any element is produced.
pub fn project_to<S, D, I>(
    source: I,
    configuration: &MapperConfiguration,
) -> PageSampleResult<impl Iterator<Item = D>>
where
    S: 'static,
    D: 'static,
    I: IntoIterator<Item = S>,
{
    let map = configuration.resolve_map::<S, D>()?;
    Ok(source.into_iter().map(move |item| (*map)(&item)))
}

/// Builds page `page_number` of a countable source and maps its items.
///
/// Only the selected window is mapped. The source is evaluated twice, see
/// [`PaginatedList::from_source`].
pub fn project_source_to_paged_list<S, D, P>(
    source: &P,
    configuration: &MapperConfiguration,
    page_number: i64,
    page_size: i64,
) -> PageSampleResult<PaginatedList<D>>
where
    S: 'static,
    D: 'static,
    P: PageSource<S> + ?Sized,
{
    let map = configuration.resolve_map::<S, D>()?;
    let page = PaginatedList::from_source(source, page_number, page_size)?;
    Ok(page.map(|item| (*map)(&item)))
}

/// Extension trait projecting any ordered sequence into a page of `D`.
pub trait ProjectToPagedList: IntoIterator + Sized {
    /// Maps the sequence with the registered `Self::Item -> D` map and
    /// returns page `page_number` of size `page_size`.
    ///
    /// Every element is counted, but only the elements of the selected
    /// window are mapped. The result equals mapping the whole sequence and
    /// then paginating it.
    fn project_to_paged_list<D>(
        self,
        configuration: &MapperConfiguration,
        page_number: i64,
        page_size: i64,
    ) -> PageSampleResult<PaginatedList<D>>
    where
        Self::Item: 'static,
        D: 'static,
    {
        let request = PageRequest::new(page_number, page_size)?;
        self.project_to_page(configuration, request)
    }

    /// Same as [`project_to_paged_list`](Self::project_to_paged_list) with an
    /// already validated request.
    fn project_to_page<D>(
        self,
        configuration: &MapperConfiguration,
        request: PageRequest,
    ) -> PageSampleResult<PaginatedList<D>>
    where
        Self::Item: 'static,
        D: 'static,
    {
        let map = configuration.resolve_map::<Self::Item, D>()?;
        let page = PaginatedList::from_request(self, request);

        debug!(
            source_type = std::any::type_name::<Self::Item>(),
            destination_type = std::any::type_name::<D>(),
            items = page.len(),
            "Projecting page"
        );

        Ok(page.map(|item| (*map)(&item)))
    }
}

impl<I: IntoIterator> ProjectToPagedList for I {}
