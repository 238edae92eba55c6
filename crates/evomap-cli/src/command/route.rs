use std::path::PathBuf;

use evomap_router::{BoxSize, EdgeRouter, PixelPoint};

use crate::util::{self, Output};

/// Box geometry shared by `route` and `edges`.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RouterArg {
    /// Item box width in pixels
    #[arg(long, default_value_t = BoxSize::DEFAULT.width)]
    box_width: f64,
    /// Item box height in pixels
    #[arg(long, default_value_t = BoxSize::DEFAULT.height)]
    box_height: f64,
    /// Gap left between the connector end and the target box
    #[arg(long, default_value_t = EdgeRouter::DEFAULT_CLEARANCE)]
    clearance: f64,
}

impl RouterArg {
    pub(crate) fn router(&self) -> EdgeRouter {
        EdgeRouter::new(BoxSize::new(self.box_width, self.box_height), self.clearance)
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RouteArg {
    /// Source box center as `x,y`
    #[arg(long, value_parser = util::parse_point, allow_hyphen_values = true)]
    from: PixelPoint,
    /// Target box center as `x,y`
    #[arg(long, value_parser = util::parse_point, allow_hyphen_values = true)]
    to: PixelPoint,
    #[clap(flatten)]
    router: RouterArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &RouteArg) -> anyhow::Result<()> {
    let RouteArg {
        from,
        to,
        router,
        output,
    } = arg;
    let edge = router.router().route(*from, *to);
    tracing::debug!(?from, ?to, ?edge, "routed connector");
    Output::save_json(&edge, output.clone())
}
