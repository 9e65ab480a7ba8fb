pub mod kpi_card;
pub mod manifold_panel;
pub mod operatives_chart;
