/*!
# `PRINT [<item>][;|,]...`

## Purpose
Shows values on the display.

## Remarks
An item is an expression, `AT row,column` or `TAB column`. A
semicolon prints nothing between items and a comma moves to the middle
of the line, or the next line if already past it. A line ends unless
the statement ends with `;` or `,`. A question mark at the start of a
line is short for `PRINT`. When the display is full it is
`DISPLAY FULL`.

## Example
```text
10 PRINT "A";"B","C"
20 PRINT TAB 4;"D"
RUN
AB              C
    D
0/20
```

*/
