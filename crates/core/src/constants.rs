/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Stored `tipo` value for expense entries
pub const ENTRY_TYPE_EXPENSE: &str = "Despesa";

/// Stored `tipo` value for income entries
pub const ENTRY_TYPE_INCOME: &str = "Receita";

/// Default chart width in pixels (16in at 100dpi)
pub const DEFAULT_CHART_WIDTH: u32 = 1600;

/// Default chart height in pixels (8in at 100dpi)
pub const DEFAULT_CHART_HEIGHT: u32 = 800;

/// Font family name chart text is registered and looked up under
pub const CHART_FONT_FAMILY: &str = "sans-serif";

pub const CHART_TITLE: &str = "Relatório Financeiro - COFIPEI";
pub const EXPENSES_PANEL_TITLE: &str = "Distribuição de Despesas por Categoria";
pub const INCOME_PANEL_TITLE: &str = "Receitas por Categoria";
pub const INCOME_X_LABEL: &str = "Categorias";
pub const INCOME_Y_LABEL: &str = "Valor (R$)";
pub const EMPTY_PANEL_LABEL: &str = "Sem dados no período";
