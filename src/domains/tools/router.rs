//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every route forwards to `ToolRegistry::call_tool`, carrying the
//! request's cancellation token so an aborted call also aborts its I/O.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::Tool,
};

use super::arguments::ToolArguments;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .get_all_tools()
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(create_route(registry.clone(), tool))
        })
}

fn create_route<S>(registry: Arc<ToolRegistry>, tool: Tool) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = tool.name.clone();
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let registry = registry.clone();
        let name = name.clone();
        let arguments = ToolArguments::from(ctx.arguments.clone());
        let ct = ctx.request_context.ct.clone();
        async move {
            registry
                .call_tool(&name, arguments, ct)
                .await
                .map_err(McpError::from)
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    struct TestServer {}

    fn test_registry() -> Arc<ToolRegistry> {
        Arc::new(ToolRegistry::from_config(&Config::default()).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"fetch"));
        assert!(names.contains(&"search"));
        assert!(names.contains(&"translate"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = test_registry();
        let router: ToolRouter<TestServer> = build_tool_router(registry.clone());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        let registry_names = registry.tool_names();
        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
