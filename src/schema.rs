use std::collections::HashMap;

// Canonical field names used across the pipeline. The accented/capitalized
// ones keep their historical spreadsheet spellings in the output header.
pub const DATA: &str = "Data";
pub const REFERENCIA: &str = "referencia";
pub const TIPO_ATIVIDADE: &str = "tipo_atividade";
pub const ENVIADO_POR: &str = "enviado_por";
pub const IDIOMA: &str = "Idioma";
pub const ARQUIVOS_EM: &str = "arquivos_em";
pub const LAUDAS: &str = "laudas";
pub const INICIO: &str = "Início";
pub const TERMINO: &str = "Término";
pub const NUM_DOCS: &str = "num_docs";
pub const TIPO_DOCUMENTO: &str = "tipo_documento";
pub const ANO_PLANILHA: &str = "ano_planilha";
pub const MES_ABA: &str = "mes_aba";
pub const MES_NUM: &str = "mes_num";

/// Output columns in their final order.
pub const CANONICAL_FIELDS: [&str; 14] = [
    DATA,
    REFERENCIA,
    TIPO_ATIVIDADE,
    ENVIADO_POR,
    IDIOMA,
    ARQUIVOS_EM,
    LAUDAS,
    INICIO,
    TERMINO,
    NUM_DOCS,
    TIPO_DOCUMENTO,
    ANO_PLANILHA,
    MES_ABA,
    MES_NUM,
];

/// Every header spelling observed in the yearly workbooks, mapped to its
/// canonical field. Canonical spellings map to themselves so a sheet that is
/// already normalized survives a second pass unchanged.
const RENAMES: [(&str, &str); 23] = [
    ("Referência", REFERENCIA),
    ("Referência CQ / REVISÃO", TIPO_ATIVIDADE),
    ("CQ / REVISÃO", TIPO_ATIVIDADE),
    ("CQ/Revisão", TIPO_ATIVIDADE),
    ("Enviado por", ENVIADO_POR),
    ("Enviado Por", ENVIADO_POR),
    ("Arquivos em", ARQUIVOS_EM),
    ("Arquivos em:", ARQUIVOS_EM),
    ("Nº de Laudas", LAUDAS),
    ("Nº de Docs", NUM_DOCS),
    ("Tipo de documento", TIPO_DOCUMENTO),
    ("Tipo de Documento", TIPO_DOCUMENTO),
    (DATA, DATA),
    (IDIOMA, IDIOMA),
    (INICIO, INICIO),
    (TERMINO, TERMINO),
    (REFERENCIA, REFERENCIA),
    (TIPO_ATIVIDADE, TIPO_ATIVIDADE),
    (ENVIADO_POR, ENVIADO_POR),
    (ARQUIVOS_EM, ARQUIVOS_EM),
    (LAUDAS, LAUDAS),
    (NUM_DOCS, NUM_DOCS),
    (TIPO_DOCUMENTO, TIPO_DOCUMENTO),
];

const MONTHS: [(&str, u32); 12] = [
    ("Janeiro", 1),
    ("Fevereiro", 2),
    ("Março", 3),
    ("Abril", 4),
    ("Maio", 5),
    ("Junho", 6),
    ("Julho", 7),
    ("Agosto", 8),
    ("Setembro", 9),
    ("Outubro", 10),
    ("Novembro", 11),
    ("Dezembro", 12),
];

/// Static lookup tables driving the normalizer: the header rename map and
/// the Portuguese month table. Built once at startup and passed by reference
/// into the pipeline stages.
#[derive(Debug)]
pub struct SchemaDictionary {
    renames: HashMap<&'static str, &'static str>,
    months: HashMap<&'static str, u32>,
}

impl SchemaDictionary {
    pub fn new() -> Self {
        Self {
            renames: RENAMES.iter().copied().collect(),
            months: MONTHS.iter().copied().collect(),
        }
    }

    /// Canonical field for a source column header, if the header is known.
    pub fn canonical_for(&self, header: &str) -> Option<&'static str> {
        self.renames.get(header).copied()
    }

    /// Month number (1..=12) for a Portuguese month name, exact spelling.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        self.months.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_field_order_is_fixed() {
        assert_eq!(CANONICAL_FIELDS.len(), 14);
        assert_eq!(CANONICAL_FIELDS[0], DATA);
        assert_eq!(CANONICAL_FIELDS[6], LAUDAS);
        assert_eq!(CANONICAL_FIELDS[13], MES_NUM);
    }

    #[test]
    fn historical_spellings_resolve_to_canonical_fields() {
        let schema = SchemaDictionary::new();

        assert_eq!(schema.canonical_for("Referência"), Some(REFERENCIA));
        assert_eq!(schema.canonical_for("CQ / REVISÃO"), Some(TIPO_ATIVIDADE));
        assert_eq!(schema.canonical_for("CQ/Revisão"), Some(TIPO_ATIVIDADE));
        assert_eq!(schema.canonical_for("Enviado por"), Some(ENVIADO_POR));
        assert_eq!(schema.canonical_for("Enviado Por"), Some(ENVIADO_POR));
        assert_eq!(schema.canonical_for("Arquivos em:"), Some(ARQUIVOS_EM));
        assert_eq!(schema.canonical_for("Nº de Laudas"), Some(LAUDAS));
        assert_eq!(schema.canonical_for("Nº de Docs"), Some(NUM_DOCS));
        assert_eq!(schema.canonical_for("Tipo de documento"), Some(TIPO_DOCUMENTO));
    }

    #[test]
    fn canonical_spellings_resolve_to_themselves() {
        let schema = SchemaDictionary::new();
        for field in [DATA, REFERENCIA, TIPO_ATIVIDADE, LAUDAS, INICIO, TERMINO] {
            assert_eq!(schema.canonical_for(field), Some(field));
        }
    }

    #[test]
    fn unknown_headers_are_not_mapped() {
        let schema = SchemaDictionary::new();
        assert_eq!(schema.canonical_for("Observações"), None);
        assert_eq!(schema.canonical_for(""), None);
    }

    #[test]
    fn month_table_covers_the_year() {
        let schema = SchemaDictionary::new();
        assert_eq!(schema.month_number("Janeiro"), Some(1));
        assert_eq!(schema.month_number("Março"), Some(3));
        assert_eq!(schema.month_number("Dezembro"), Some(12));
        assert_eq!(schema.month_number("janeiro"), None);
        assert_eq!(schema.month_number("January"), None);
    }
}
