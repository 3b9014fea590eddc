use crate::schema::{self, SchemaDictionary};
use crate::types::{CanonicalRecord, RawSheet};

use super::coerce;

/// Reshapes one raw sheet into canonical records: header renaming, value
/// coercion, provenance columns, fixed-order projection.
pub struct SheetNormalizer<'a> {
    schema: &'a SchemaDictionary,
}

impl<'a> SheetNormalizer<'a> {
    pub fn new(schema: &'a SchemaDictionary) -> Self {
        Self { schema }
    }

    /// Produces one canonical record per input row, in input order. Rows are
    /// never rejected: a cell that cannot be coerced degrades to an empty
    /// value, or zero for `num_docs`.
    pub fn normalize_sheet(&self, sheet: &RawSheet, year: &str) -> Vec<CanonicalRecord> {
        let mapping = self.map_headers(&sheet.headers);
        let mes_num = self.month_of_label(&sheet.label);

        sheet
            .rows
            .iter()
            .map(|row| self.normalize_row(row, &mapping, year, &sheet.label, mes_num))
            .collect()
    }

    /// Resolves each header to its canonical field. Headers the dictionary
    /// does not know are dropped; when two source headers land on the same
    /// canonical field the first occurrence wins.
    fn map_headers(&self, headers: &[String]) -> Vec<(usize, &'static str)> {
        let mut mapping: Vec<(usize, &'static str)> = Vec::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(canonical) = self.schema.canonical_for(header.trim()) {
                if !mapping.iter().any(|(_, field)| *field == canonical) {
                    mapping.push((index, canonical));
                }
            }
        }
        mapping
    }

    /// Month number from the first whitespace-delimited token of the sheet
    /// label, e.g. "Março 2023" -> 3.
    fn month_of_label(&self, label: &str) -> Option<u32> {
        label
            .split_whitespace()
            .next()
            .and_then(|token| self.schema.month_number(token))
    }

    fn normalize_row(
        &self,
        row: &[String],
        mapping: &[(usize, &'static str)],
        year: &str,
        label: &str,
        mes_num: Option<u32>,
    ) -> CanonicalRecord {
        let mut record = CanonicalRecord {
            ano_planilha: year.to_string(),
            mes_aba: label.to_string(),
            mes_num,
            ..CanonicalRecord::default()
        };

        for (index, field) in mapping {
            let value = row.get(*index).map(String::as_str).unwrap_or("");
            match *field {
                schema::DATA => record.data = coerce::coerce_date(value),
                schema::REFERENCIA => record.referencia = value.to_string(),
                schema::TIPO_ATIVIDADE => {
                    record.tipo_atividade = coerce::normalize_activity(value)
                }
                schema::ENVIADO_POR => record.enviado_por = value.to_string(),
                schema::IDIOMA => record.idioma = value.to_string(),
                schema::ARQUIVOS_EM => record.arquivos_em = value.to_string(),
                schema::LAUDAS => record.laudas = coerce::coerce_laudas(value),
                schema::INICIO => record.inicio = coerce::coerce_time(value),
                schema::TERMINO => record.termino = coerce::coerce_time(value),
                schema::NUM_DOCS => record.num_docs = coerce::coerce_num_docs(value),
                schema::TIPO_DOCUMENTO => record.tipo_documento = value.to_string(),
                // Provenance fields are derived from context, never read
                _ => {}
            }
        }

        record
    }
}
