// Inline upload page. No templating, no assets: the whole UI is this
// one document talking to /api/ingest.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>tablemap</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 2rem; color: #222; }
  h1 { font-size: 1.4rem; }
  h2 { font-size: 1.1rem; margin-top: 2rem; }
  fieldset { border: 1px solid #ccc; border-radius: 6px; margin-bottom: 1rem; max-width: 40rem; }
  table { border-collapse: collapse; margin-top: 0.5rem; }
  th, td { border: 1px solid #bbb; padding: 0.3rem 0.6rem; text-align: left; vertical-align: top; }
  th { background: #f0f0f0; }
  td.values { max-width: 40rem; word-break: break-word; font-family: monospace; font-size: 0.85rem; }
  .warning { color: #a15c00; background: #fff4e0; padding: 0.5rem 0.8rem; border-radius: 4px; margin: 0.5rem 0; }
  .nomatch { color: #999; font-style: italic; }
  button { padding: 0.4rem 1.2rem; }
</style>
</head>
<body>
<h1>tablemap &mdash; distinct values &amp; column mapping</h1>

<form id="upload-form">
  <fieldset>
    <legend>Upload Your Files</legend>
    <p><label>Main table (csv/xlsx): <input type="file" name="main" accept=".csv,.xlsx"></label></p>
    <p><label>Supplementary tables (up to 11): <input type="file" name="supp" accept=".csv,.xlsx" multiple></label></p>
    <button type="submit">Ingest</button>
  </fieldset>
</form>

<div id="warnings"></div>
<div id="results"></div>

<script>
const form = document.getElementById('upload-form');
const warningsEl = document.getElementById('warnings');
const resultsEl = document.getElementById('results');

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  warningsEl.textContent = '';
  resultsEl.textContent = 'Working...';

  const data = new FormData();
  const main = form.elements['main'].files[0];
  if (main) data.append('main', main);
  for (const file of form.elements['supp'].files) data.append('supp', file);

  try {
    const resp = await fetch('/api/ingest', { method: 'POST', body: data });
    if (!resp.ok) {
      resultsEl.textContent = 'Error: ' + await resp.text();
      return;
    }
    render(await resp.json());
  } catch (err) {
    resultsEl.textContent = 'Request failed: ' + err;
  }
});

function render(report) {
  for (const warning of report.warnings) {
    const div = document.createElement('div');
    div.className = 'warning';
    div.textContent = warning;
    warningsEl.appendChild(div);
  }

  resultsEl.textContent = '';

  const heading = document.createElement('h2');
  heading.textContent = 'Distinct Values per Table';
  resultsEl.appendChild(heading);

  for (const table of report.tables) {
    const sub = document.createElement('h2');
    sub.textContent = `${table.table} (${table.rowCount} rows, ${table.columnCount} cols)`;
    resultsEl.appendChild(sub);

    const el = document.createElement('table');
    el.innerHTML = '<tr><th>Column Name</th><th>Distinct Values</th></tr>';
    for (const column of table.columns) {
      const row = el.insertRow();
      row.insertCell().textContent = column.column;
      const cell = row.insertCell();
      cell.className = 'values';
      cell.textContent = column.values.join(', ');
    }
    resultsEl.appendChild(el);
  }

  if (report.mapping) {
    const sub = document.createElement('h2');
    sub.textContent = 'Mapping between Main Table and Supplementary Tables';
    resultsEl.appendChild(sub);

    const el = document.createElement('table');
    const head = el.insertRow();
    const mainHead = document.createElement('th');
    mainHead.textContent = 'Main Table Column';
    head.appendChild(mainHead);
    for (const label of report.mapping.supplementary) {
      const th = document.createElement('th');
      th.textContent = label;
      head.appendChild(th);
    }

    for (const row of report.mapping.rows) {
      const tr = el.insertRow();
      tr.insertCell().textContent = row.mainColumn;
      for (const match of row.matches) {
        const cell = tr.insertCell();
        if (match === null) {
          cell.textContent = 'no match';
          cell.className = 'nomatch';
        } else {
          cell.textContent = match;
        }
      }
    }
    resultsEl.appendChild(el);
  }
}
</script>
</body>
</html>
"#;
