use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::schema::CANONICAL_FIELDS;
use crate::types::CanonicalRecord;

/// UTF-8 byte-order marker, emitted first so spreadsheet tools pick up the
/// encoding when they open the file.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes the consolidated dataset as comma-separated UTF-8: the canonical
/// header row in fixed order, then one line per record, no index column.
pub fn write_csv(path: &Path, records: &[CanonicalRecord]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(CANONICAL_FIELDS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn output_starts_with_bom_and_canonical_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saida.csv");

        let record = CanonicalRecord {
            data: "05/03/2024".to_string(),
            referencia: "REF-001".to_string(),
            laudas: Some(12.5),
            num_docs: 3,
            ano_planilha: "2024".to_string(),
            mes_aba: "Março 2024".to_string(),
            mes_num: Some(3),
            ..CanonicalRecord::default()
        };
        write_csv(&path, &[record]).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let content = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Data,referencia,tipo_atividade,enviado_por,Idioma,arquivos_em,\
             laudas,Início,Término,num_docs,tipo_documento,ano_planilha,mes_aba,mes_num"
        );
        assert_eq!(
            lines.next().unwrap(),
            "05/03/2024,REF-001,,,,,12.5,,,3,,2024,Março 2024,3"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_cells_stay_empty_not_zeroed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saida.csv");

        write_csv(&path, &[CanonicalRecord::default()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let record_line = content.lines().nth(1).unwrap();
        assert_eq!(record_line, ",,,,,,,,,0,,,,");
    }
}
