use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::METRICS;
use crate::state::LandingState;

/// Mocked analytics window. Bars animate in with the surrounding section.
pub fn dashboard(state: &LandingState) -> Html {
    html! {
        <div class="dashboard-container">
            <div class="dashboard-glow" />
            <div class="dashboard">
                <div class="dashboard-content">
                    <div class="dashboard-header">
                        <div class="window-controls">
                            <div class="control red" />
                            <div class="control yellow" />
                            <div class="control green" />
                        </div>
                        <div class="dashboard-title">{"Team6 Analytics Dashboard"}</div>
                    </div>

                    <div class="metrics">
                        { for METRICS.iter().map(|metric| html! {
                            <div class="metric-card" key={metric.label}>
                                <div class="metric-header">
                                    <span class="metric-label">{metric.label}</span>
                                    <span class="metric-value">{metric.value}</span>
                                </div>
                                <div class="progress-bar">
                                    <div
                                        class={state.progress_classes(metric)}
                                        style={format!("width: {};", state.progress_width(metric))}
                                    />
                                </div>
                            </div>
                        }) }

                        <div class="notification-card">
                            <div class="notification-header">
                                <Icon kind={IconKind::Star} class={classes!("notification-icon")} />
                                <span class="notification-title">{"실시간 알림"}</span>
                            </div>
                            <p class="notification-text">{"새로운 수익 기회가 감지되었습니다. 예상 증가율: +15%"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
