use crate::domain::{FilterState, Snapshot, TrendPoint, ViewMode};
use crate::templates::desktop_layout;
use crate::templates::pages::{insights_view, search_view, trends_view};
use maud::Markup;

pub struct DashboardVm<'a> {
    pub view: ViewMode,
    pub filter: &'a FilterState,
    pub snapshot: &'a Snapshot<'a>,
    pub trends: &'a [TrendPoint],
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let content = match vm.view {
        ViewMode::Search => search_view(vm.filter, &vm.snapshot.records, &vm.snapshot.summary),
        ViewMode::Trends => trends_view(vm.trends),
        ViewMode::Insights => insights_view(&vm.snapshot.summary),
    };

    desktop_layout(vm.view.label(), vm.view, content)
}
