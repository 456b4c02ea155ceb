//! Minimal single-font PDF writer used by the test suites.

/// One page per entry; each page shows its lines top to bottom in
/// Helvetica.
pub fn build(pages: &[&[&str]]) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + i * 2))
        .collect();

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".into());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .into(),
    );

    for (i, lines) in pages.iter().enumerate() {
        let mut content = String::new();
        if !lines.is_empty() {
            content.push_str("BT\n/F1 12 Tf\n72 720 Td\n");
            for (j, line) in lines.iter().enumerate() {
                if j > 0 {
                    content.push_str("0 -16 Td\n");
                }
                content.push_str(&format!("({line}) Tj\n"));
            }
            content.push_str("ET");
        }
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + i * 2
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
    }

    let xref_at = pdf.len();
    let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        tail.push_str(&format!("{offset:010} 00000 n \n"));
    }
    tail.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    ));
    pdf.extend_from_slice(tail.as_bytes());
    pdf
}

/// Two pages mentioning "budget" five times.
pub fn budget_report() -> Vec<u8> {
    build(&[
        &[
            "The budget for next year is ready.",
            "Each budget line was reviewed.",
        ],
        &[
            "The budget grows by five percent.",
            "A smaller budget covers travel.",
            "The final budget is approved.",
        ],
    ])
}
