/*!
# `READ <variable>`

## Purpose
Takes the next `DATA` item.

## Remarks
Items are read in program order. Reading past the last one is
`SUBSCRIPT OUT OF RANGE`. `RESTORE` starts over.

## Example
```text
10 READ A
20 PRINT A
30 GOTO 10
40 DATA 1,2
RUN
1
2
3/10
```

*/
