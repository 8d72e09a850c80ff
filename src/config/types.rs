use serde::{Deserialize, Serialize};

/// Where the input files live. Relative paths resolve against the base dir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_products_file")]
    pub products_file: String,
    #[serde(default = "default_salesmen_file")]
    pub salesmen_file: String,
    /// Sales directory, relative to `data_dir`.
    #[serde(default = "default_sales_dir")]
    pub sales_dir: String,
    /// Only files with this extension are read as sales files.
    #[serde(default = "default_sales_extension")]
    pub sales_extension: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            products_file: default_products_file(),
            salesmen_file: default_salesmen_file(),
            sales_dir: default_sales_dir(),
            sales_extension: default_sales_extension(),
        }
    }
}

fn default_data_dir() -> String { "data".to_string() }
fn default_products_file() -> String { "productos.txt".to_string() }
fn default_salesmen_file() -> String { "vendedores.txt".to_string() }
fn default_sales_dir() -> String { "ventas".to_string() }
fn default_sales_extension() -> String { "txt".to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_salesmen_report")]
    pub salesmen_report: String,
    #[serde(default = "default_products_report")]
    pub products_report: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            salesmen_report: default_salesmen_report(),
            products_report: default_products_report(),
        }
    }
}

fn default_output_dir() -> String { "output".to_string() }
fn default_salesmen_report() -> String { "reporte_vendedores.csv".to_string() }
fn default_products_report() -> String { "reporte_productos.csv".to_string() }

/// On-disk shape of `salesreport.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalesReportToml {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
