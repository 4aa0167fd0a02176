//! Picking the shape (content type) a script should work with.
//!
//! [`select_shape`] fetches the tenant's shapes, narrows them with an
//! optional predicate and either picks the sole survivor or asks the user.
//!
//! # Example
//!
//! ```rust,ignore
//! use crystallize_onboard::shape::{select_shape, ShapeQuery};
//!
//! let query = ShapeQuery::new()
//!     .filter(|shape| shape.shape_type == "product")
//!     .message("Which product shape should be imported?");
//! let selected = select_shape(&context, &prompter, query).await?;
//! println!("{} under {}", selected.shape_id, selected.root_item_id);
//! ```

mod errors;

pub use errors::ShapeError;

use serde::Serialize;

use crate::prompt::{choose, Choice, Prompter};
use crate::tenant::{fetch_tenant_info, Shape, TenantContext};

/// Base URL of the Crystallize PIM app.
pub const PIM_APP_URL: &str = "https://pim.crystallize.com";

const DEFAULT_MESSAGE: &str = "Select a shape";

type ShapeFilter<'a> = Box<dyn Fn(&Shape) -> bool + Send + Sync + 'a>;

/// Options for [`select_shape`].
#[derive(Default)]
pub struct ShapeQuery<'a> {
    filter: Option<ShapeFilter<'a>>,
    message: Option<String>,
}

impl<'a> ShapeQuery<'a> {
    /// All shapes, default prompt message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only shapes for which `predicate` returns `true`.
    #[must_use]
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Shape) -> bool + Send + Sync + 'a,
    {
        self.filter = Some(Box::new(predicate));
        self
    }

    /// Keeps only shapes of the given type (e.g. `product`).
    #[must_use]
    pub fn of_type(self, shape_type: &'a str) -> Self {
        self.filter(move |shape| shape.shape_type == shape_type)
    }

    /// Overrides the prompt shown when several shapes remain.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn matches(&self, shape: &Shape) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(shape))
    }
}

impl std::fmt::Debug for ShapeQuery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeQuery")
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("message", &self.message)
            .finish()
    }
}

/// The chosen shape, with its id repeated as `shapeId` and the tenant's
/// catalogue root alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedShape {
    /// The full shape record.
    #[serde(flatten)]
    pub shape: Shape,
    /// Id of the selected shape.
    pub shape_id: String,
    /// Id of the tenant's root catalogue item.
    pub root_item_id: String,
}

/// Link to the shape editor of a tenant.
#[must_use]
pub fn shape_settings_url(tenant_identifier: &str, language: Option<&str>) -> String {
    format!(
        "{PIM_APP_URL}/@{tenant_identifier}/{}/settings/shapes",
        language.unwrap_or("en")
    )
}

/// Fetches the tenant's shapes and selects one.
///
/// A spinner is shown while the tenant info loads. If exactly one shape
/// survives the filter it is selected without prompting.
///
/// # Errors
///
/// - [`ShapeError::Graphql`] if the tenant info cannot be fetched
/// - [`ShapeError::NoShapes`] if no shape survives the filter (before any prompt)
/// - [`ShapeError::Prompt`] if the selection prompt fails
pub async fn select_shape<P>(
    context: &TenantContext,
    prompter: &P,
    query: ShapeQuery<'_>,
) -> Result<SelectedShape, ShapeError>
where
    P: Prompter + ?Sized,
{
    let spinner = prompter.spinner("Fetching tenant shapes");
    let info = fetch_tenant_info(context.client(), context.tenant_id()).await;
    spinner.stop();
    let info = info?;

    let mut shapes: Vec<Shape> = info
        .shapes
        .into_iter()
        .filter(|shape| query.matches(shape))
        .collect();
    tracing::debug!("{} shape(s) available for selection", shapes.len());

    let shape = match shapes.len() {
        0 => {
            return Err(ShapeError::NoShapes {
                url: shape_settings_url(&info.identifier, context.language()),
            });
        }
        1 => {
            let shape = shapes.remove(0);
            prompter.info(&format!("Using shape {}", shape.name));
            shape
        }
        _ => {
            let choices: Vec<Choice> = shapes
                .iter()
                .map(|shape| Choice::new(&shape.name, &shape.id))
                .collect();
            let message = query.message.as_deref().unwrap_or(DEFAULT_MESSAGE);
            let picked = choose(prompter, message, &choices)?;
            let index = choices
                .iter()
                .position(|choice| choice.value == picked.value)
                .unwrap_or_default();
            shapes.swap_remove(index)
        }
    };

    Ok(SelectedShape {
        shape_id: shape.id.clone(),
        shape,
        root_item_id: info.root_item_id,
    })
}
