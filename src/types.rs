use serde::Serialize;

/// One sheet as handed over by the workbook reader: de-duplicated header
/// names plus rows of cell text, fully-blank rows already dropped.
#[derive(Debug, Clone)]
pub struct RawSheet {
    pub label: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One row of the consolidated dataset. Field order is the output column
/// order; empty strings and `None` serialize as empty CSV cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalRecord {
    #[serde(rename = "Data")]
    pub data: String,
    pub referencia: String,
    pub tipo_atividade: String,
    pub enviado_por: String,
    #[serde(rename = "Idioma")]
    pub idioma: String,
    pub arquivos_em: String,
    pub laudas: Option<f64>,
    #[serde(rename = "Início")]
    pub inicio: String,
    #[serde(rename = "Término")]
    pub termino: String,
    pub num_docs: u32,
    pub tipo_documento: String,
    pub ano_planilha: String,
    pub mes_aba: String,
    pub mes_num: Option<u32>,
}
