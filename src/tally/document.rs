use serde::{Deserialize, Serialize};

use super::writer::{Element, render_document};
use crate::types::{LedgerEntry, Voucher, VoucherBatch};

const TALLY_REQUEST: &str = "Import Data";
const REPORT_NAME: &str = "Vouchers";
const VOUCHER_ACTION: &str = "Create";

/// Everything needed to render one Tally import envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub company_name: String,
    pub vouchers: VoucherBatch,
}

impl ExportDocument {
    pub fn new(company_name: impl Into<String>, vouchers: VoucherBatch) -> Self {
        Self {
            company_name: company_name.into(),
            vouchers,
        }
    }

    /// Builds the `ENVELOPE` tree Tally's "Import Data" request expects.
    pub fn to_element(&self) -> Element {
        let request_desc = Element::new("REQUESTDESC")
            .child(Element::text("REPORTNAME", REPORT_NAME))
            .child(
                Element::new("STATICVARIABLES")
                    .child(Element::text("SVCURRENTCOMPANY", self.company_name.as_str())),
            );

        let request_data = Element::new("REQUESTDATA").children(
            self.vouchers
                .iter()
                .map(|voucher| Element::new("TALLYMESSAGE").child(voucher_element(voucher))),
        );

        Element::new("ENVELOPE")
            .child(Element::new("HEADER").child(Element::text("TALLYREQUEST", TALLY_REQUEST)))
            .child(
                Element::new("BODY").child(
                    Element::new("IMPORTDATA")
                        .child(request_desc)
                        .child(request_data),
                ),
            )
    }

    /// Renders the document as indented XML text.
    pub fn render(&self) -> String {
        render_document(&self.to_element())
    }
}

fn voucher_element(voucher: &Voucher) -> Element {
    let voucher_type = voucher.voucher_type.as_str();

    Element::new("VOUCHER")
        .attr("VCHTYPE", voucher_type)
        .attr("ACTION", VOUCHER_ACTION)
        .child(Element::text("DATE", voucher.tally_date()))
        .child(Element::text("VOUCHERTYPENAME", voucher_type))
        .child(Element::text("NARRATION", voucher.narration.as_str()))
        .children(voucher.entries.iter().map(entry_element))
}

fn entry_element(entry: &LedgerEntry) -> Element {
    Element::new("ALLLEDGERENTRIES.LIST")
        .child(Element::text("LEDGERNAME", entry.ledger_name.as_str()))
        .child(Element::text("ISDEEMEDPOSITIVE", entry.deemed_positive_flag()))
        .child(Element::text("AMOUNT", entry.amount.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecordDate, TransactionRecord};
    use crate::voucher::assemble_batch;
    use rust_decimal::Decimal;
    use serde::Deserialize;
    use std::str::FromStr;

    #[derive(Debug, Deserialize)]
    struct EnvelopeDto {
        #[serde(rename = "HEADER")]
        header: HeaderDto,
        #[serde(rename = "BODY")]
        body: BodyDto,
    }

    #[derive(Debug, Deserialize)]
    struct HeaderDto {
        #[serde(rename = "TALLYREQUEST")]
        tally_request: String,
    }

    #[derive(Debug, Deserialize)]
    struct BodyDto {
        #[serde(rename = "IMPORTDATA")]
        import_data: ImportDataDto,
    }

    #[derive(Debug, Deserialize)]
    struct ImportDataDto {
        #[serde(rename = "REQUESTDESC")]
        request_desc: RequestDescDto,
        #[serde(rename = "REQUESTDATA")]
        request_data: RequestDataDto,
    }

    #[derive(Debug, Deserialize)]
    struct RequestDescDto {
        #[serde(rename = "REPORTNAME")]
        report_name: String,
        #[serde(rename = "STATICVARIABLES")]
        static_variables: StaticVariablesDto,
    }

    #[derive(Debug, Deserialize)]
    struct StaticVariablesDto {
        #[serde(rename = "SVCURRENTCOMPANY")]
        current_company: String,
    }

    #[derive(Debug, Deserialize)]
    struct RequestDataDto {
        #[serde(rename = "TALLYMESSAGE", default)]
        messages: Vec<TallyMessageDto>,
    }

    #[derive(Debug, Deserialize)]
    struct TallyMessageDto {
        #[serde(rename = "VOUCHER")]
        voucher: VoucherDto,
    }

    #[derive(Debug, Deserialize)]
    struct VoucherDto {
        #[serde(rename = "@VCHTYPE", alias = "VCHTYPE")]
        vch_type: String,
        #[serde(rename = "@ACTION", alias = "ACTION")]
        action: String,
        #[serde(rename = "DATE")]
        date: String,
        #[serde(rename = "VOUCHERTYPENAME")]
        voucher_type_name: String,
        #[serde(rename = "NARRATION")]
        narration: String,
        #[serde(rename = "ALLLEDGERENTRIES.LIST", default)]
        entries: Vec<LedgerEntryDto>,
    }

    #[derive(Debug, Deserialize)]
    struct LedgerEntryDto {
        #[serde(rename = "LEDGERNAME")]
        ledger_name: String,
        #[serde(rename = "ISDEEMEDPOSITIVE")]
        is_deemed_positive: String,
        #[serde(rename = "AMOUNT")]
        amount: String,
    }

    fn record(date: &str, narration: &str, withdrawal: &str, deposit: &str, ledger: &str) -> TransactionRecord {
        TransactionRecord {
            date: RecordDate::from(date),
            narration: narration.to_string(),
            withdrawal: Decimal::from_str(withdrawal).unwrap(),
            deposit: Decimal::from_str(deposit).unwrap(),
            counter_ledger: ledger.to_string(),
        }
    }

    fn sample_document() -> ExportDocument {
        let records = vec![
            record("2024-04-01", "ATM withdrawal", "500", "0", "Cash"),
            record("2024-04-02", "Salary", "0", "40000", "Employer"),
        ];
        ExportDocument::new("ABC Pvt Ltd", assemble_batch(&records, "HDFC Bank").unwrap())
    }

    const GOLDEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ENVELOPE>
  <HEADER>
    <TALLYREQUEST>Import Data</TALLYREQUEST>
  </HEADER>
  <BODY>
    <IMPORTDATA>
      <REQUESTDESC>
        <REPORTNAME>Vouchers</REPORTNAME>
        <STATICVARIABLES>
          <SVCURRENTCOMPANY>ABC Pvt Ltd</SVCURRENTCOMPANY>
        </STATICVARIABLES>
      </REQUESTDESC>
      <REQUESTDATA>
        <TALLYMESSAGE>
          <VOUCHER VCHTYPE="Payment" ACTION="Create">
            <DATE>20240401</DATE>
            <VOUCHERTYPENAME>Payment</VOUCHERTYPENAME>
            <NARRATION>ATM withdrawal</NARRATION>
            <ALLLEDGERENTRIES.LIST>
              <LEDGERNAME>Cash</LEDGERNAME>
              <ISDEEMEDPOSITIVE>Yes</ISDEEMEDPOSITIVE>
              <AMOUNT>-500</AMOUNT>
            </ALLLEDGERENTRIES.LIST>
            <ALLLEDGERENTRIES.LIST>
              <LEDGERNAME>HDFC Bank</LEDGERNAME>
              <ISDEEMEDPOSITIVE>No</ISDEEMEDPOSITIVE>
              <AMOUNT>500</AMOUNT>
            </ALLLEDGERENTRIES.LIST>
          </VOUCHER>
        </TALLYMESSAGE>
        <TALLYMESSAGE>
          <VOUCHER VCHTYPE="Receipt" ACTION="Create">
            <DATE>20240402</DATE>
            <VOUCHERTYPENAME>Receipt</VOUCHERTYPENAME>
            <NARRATION>Salary</NARRATION>
            <ALLLEDGERENTRIES.LIST>
              <LEDGERNAME>Employer</LEDGERNAME>
              <ISDEEMEDPOSITIVE>No</ISDEEMEDPOSITIVE>
              <AMOUNT>40000</AMOUNT>
            </ALLLEDGERENTRIES.LIST>
            <ALLLEDGERENTRIES.LIST>
              <LEDGERNAME>HDFC Bank</LEDGERNAME>
              <ISDEEMEDPOSITIVE>Yes</ISDEEMEDPOSITIVE>
              <AMOUNT>-40000</AMOUNT>
            </ALLLEDGERENTRIES.LIST>
          </VOUCHER>
        </TALLYMESSAGE>
      </REQUESTDATA>
    </IMPORTDATA>
  </BODY>
</ENVELOPE>
"#;

    #[test]
    fn test_render_matches_golden_output() {
        assert_eq!(sample_document().render(), GOLDEN);
    }

    #[test]
    fn test_render_is_deterministic() {
        let document = sample_document();
        assert_eq!(document.render(), document.render());
    }

    #[test]
    fn test_empty_batch_renders_empty_request_data() {
        let document = ExportDocument::new("ABC Pvt Ltd", VoucherBatch::default());
        let xml = document.render();

        assert!(xml.contains("      <REQUESTDATA/>\n"));
        assert!(!xml.contains("TALLYMESSAGE"));
    }

    #[test]
    fn test_company_name_is_escaped() {
        let document = ExportDocument::new("Smith & Sons <Traders>", VoucherBatch::default());
        assert!(
            document
                .render()
                .contains("<SVCURRENTCOMPANY>Smith &amp; Sons &lt;Traders&gt;</SVCURRENTCOMPANY>")
        );
    }

    #[test]
    fn test_round_trip_through_xml_parser() {
        let records = vec![
            record("2024-04-01", "Fees & <charges> \"Q1\" 'urgent'", "1250.75", "0", "Bank Charges & Co"),
            record("05/04/2024", "Refund", "0", "99.99", "O'Brien <Vendor>"),
            record("2024-04-06", "line1\r\nline2\rend", "10", "0", "Cash\rDesk"),
        ];
        let batch = assemble_batch(&records, "HDFC Bank").unwrap();
        let document = ExportDocument::new("A&B Traders", batch.clone());

        let xml = document.render();
        let start = xml.find("<ENVELOPE>").unwrap();
        let parsed: EnvelopeDto = serde_xml_rs::from_str(&xml[start..]).unwrap();

        assert_eq!(parsed.header.tally_request, "Import Data");
        let import = parsed.body.import_data;
        assert_eq!(import.request_desc.report_name, "Vouchers");
        assert_eq!(import.request_desc.static_variables.current_company, "A&B Traders");

        let messages = import.request_data.messages;
        assert_eq!(messages.len(), batch.len());

        for (message, voucher) in messages.iter().zip(batch.iter()) {
            let dto = &message.voucher;
            assert_eq!(dto.vch_type, voucher.voucher_type.as_str());
            assert_eq!(dto.action, "Create");
            assert_eq!(dto.date, voucher.tally_date());
            assert_eq!(dto.voucher_type_name, voucher.voucher_type.as_str());
            assert_eq!(dto.narration, voucher.narration);
            assert_eq!(dto.entries.len(), 2);

            for (entry_dto, entry) in dto.entries.iter().zip(voucher.entries.iter()) {
                assert_eq!(entry_dto.ledger_name, entry.ledger_name);
                assert_eq!(entry_dto.is_deemed_positive, entry.deemed_positive_flag());
                assert_eq!(Decimal::from_str(&entry_dto.amount).unwrap(), entry.amount);
            }
        }
    }
}
